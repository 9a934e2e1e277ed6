//! Variant and size selection on the product page.
//!
//! Before a visitor can send an inquiry, every choice the item offers must be
//! made: a variant when the item has variants, a size when it has more than
//! one.

use galleri_core::{CatalogItem, ValidationError};

/// The visitor's choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub variant: Option<String>,
    pub size: Option<String>,
}

impl Selection {
    pub fn new(variant: Option<&str>, size: Option<&str>) -> Self {
        let clean = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            variant: clean(variant),
            size: clean(size),
        }
    }
}

/// A validated inquiry about one artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub item_id: String,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Check `selection` against what `item` offers.
///
/// Labels match case-insensitively; the inquiry carries the item's own
/// spelling. An item with exactly one size implies it.
pub fn validate_selection(
    item: &CatalogItem,
    selection: &Selection,
) -> Result<Inquiry, ValidationError> {
    let variant = pick(
        item.variants.iter().map(String::as_str),
        selection.variant.as_deref(),
    )
    .map_err(|unknown| ValidationError::UnknownVariant {
        item: item.name.clone(),
        variant: unknown,
    })?;
    if variant.is_none() && !item.variants.is_empty() {
        return Err(ValidationError::MissingVariant {
            item: item.name.clone(),
        });
    }

    let sizes = item.sizes();
    let size = match pick(sizes.iter().copied(), selection.size.as_deref()) {
        Ok(Some(size)) => Some(size),
        Ok(None) if sizes.len() == 1 => Some(sizes[0].to_string()),
        Ok(None) if sizes.len() > 1 => {
            return Err(ValidationError::MissingSize {
                item: item.name.clone(),
            });
        }
        Ok(None) => None,
        Err(unknown) => {
            return Err(ValidationError::UnknownSize {
                item: item.name.clone(),
                size: unknown,
            });
        }
    };

    let subject = format!("Förfrågan: {}", item.name);
    let mut body = format!("Hej!\n\nJag är intresserad av verket \"{}\".\n", item.name);
    if let Some(v) = &variant {
        body.push_str(&format!("Variant: {v}\n"));
    }
    if let Some(s) = &size {
        body.push_str(&format!("Storlek: {s}\n"));
    }
    body.push('\n');

    Ok(Inquiry {
        item_id: item.id.clone(),
        variant,
        size,
        subject,
        body,
    })
}

/// Resolve a chosen label against the offered ones.
///
/// `Ok(None)` when nothing was chosen, `Err(choice)` when the choice is not
/// offered.
fn pick<'a>(
    mut offered: impl Iterator<Item = &'a str>,
    choice: Option<&str>,
) -> Result<Option<String>, String> {
    let Some(choice) = choice.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    let wanted = choice.to_lowercase();
    offered
        .find(|o| o.to_lowercase() == wanted)
        .map(|o| Some(o.to_string()))
        .ok_or_else(|| choice.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_with_variants() -> CatalogItem {
        let mut item = CatalogItem::new("hund", "Hundporträtt");
        item.variants = vec!["Labrador".into(), "Golden Retriever".into(), "Schäfer".into()];
        item.size = "A4, A3".into();
        item
    }

    #[test]
    fn complete_selection_yields_inquiry() {
        let item = print_with_variants();
        let inquiry =
            validate_selection(&item, &Selection::new(Some("schäfer"), Some("A3"))).unwrap();
        assert_eq!(inquiry.variant.as_deref(), Some("Schäfer"));
        assert_eq!(inquiry.size.as_deref(), Some("A3"));
        assert_eq!(inquiry.subject, "Förfrågan: Hundporträtt");
        assert!(inquiry.body.contains("Variant: Schäfer"));
        assert!(inquiry.body.contains("Storlek: A3"));
    }

    #[test]
    fn missing_variant_blocks() {
        let item = print_with_variants();
        assert_eq!(
            validate_selection(&item, &Selection::new(None, Some("A4"))),
            Err(ValidationError::MissingVariant {
                item: "Hundporträtt".into()
            })
        );
    }

    #[test]
    fn unknown_variant_blocks() {
        let item = print_with_variants();
        assert!(matches!(
            validate_selection(&item, &Selection::new(Some("Tax"), Some("A4"))),
            Err(ValidationError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn missing_size_blocks_when_several_offered() {
        let item = print_with_variants();
        assert!(matches!(
            validate_selection(&item, &Selection::new(Some("Labrador"), None)),
            Err(ValidationError::MissingSize { .. })
        ));
    }

    #[test]
    fn single_size_is_implied() {
        let mut item = CatalogItem::new("a", "A");
        item.size = "50x70 cm".into();
        let inquiry = validate_selection(&item, &Selection::default()).unwrap();
        assert_eq!(inquiry.size.as_deref(), Some("50x70 cm"));
    }

    #[test]
    fn plain_original_needs_no_choices() {
        let item = CatalogItem::new("a", "A");
        let inquiry = validate_selection(&item, &Selection::new(Some(" "), None)).unwrap();
        assert_eq!(inquiry.variant, None);
        assert_eq!(inquiry.size, None);
    }

    #[test]
    fn size_not_offered_is_rejected() {
        let item = CatalogItem::new("a", "A");
        assert!(matches!(
            validate_selection(&item, &Selection::new(None, Some("XL"))),
            Err(ValidationError::UnknownSize { .. })
        ));
    }
}
