//! "Related works" ranking for the product page.
//!
//! Each other item scores +3 for the same type, +2 per shared distinct color
//! and +1 for the same category. Scoring items are ranked by score with ties
//! in catalog order; the list is then topped up with non-scoring items in
//! catalog order.

use std::collections::HashSet;

use galleri_core::CatalogItem;

/// Number of related works shown on a product page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

const TYPE_WEIGHT: u32 = 3;
const COLOR_WEIGHT: u32 = 2;
const CATEGORY_WEIGHT: u32 = 1;

/// Similarity of `candidate` to `focal`.
pub fn score(focal: &CatalogItem, candidate: &CatalogItem) -> u32 {
    let mut total = 0;

    if !focal.kind.is_empty() && focal.kind == candidate.kind {
        total += TYPE_WEIGHT;
    }

    let mut counted = HashSet::new();
    for color in &focal.colors {
        if counted.insert(color.as_str()) && candidate.colors.contains(color) {
            total += COLOR_WEIGHT;
        }
    }

    if focal.category.is_some() && focal.category == candidate.category {
        total += CATEGORY_WEIGHT;
    }

    total
}

/// Up to `limit` items related to `focal`, best match first.
///
/// Never contains the focal item or the same id twice.
pub fn related_items<'a>(
    focal: &CatalogItem,
    items: &'a [CatalogItem],
    limit: usize,
) -> Vec<&'a CatalogItem> {
    let mut scored: Vec<(u32, &CatalogItem)> = items
        .iter()
        .filter(|item| item.id != focal.id)
        .map(|item| (score(focal, item), item))
        .filter(|(s, _)| *s > 0)
        .collect();
    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut chosen: HashSet<&str> = HashSet::new();
    let mut related = Vec::with_capacity(limit);

    let ranked = scored.into_iter().map(|(_, item)| item);
    let backfill = items.iter().filter(|item| item.id != focal.id);
    for item in ranked.chain(backfill) {
        if related.len() >= limit {
            break;
        }
        if chosen.insert(item.id.as_str()) {
            related.push(item);
        }
    }

    log::debug!(
        "Related to '{}': {:?}",
        focal.id,
        related.iter().map(|i| i.id.as_str()).collect::<Vec<_>>()
    );
    related
}

/// Related items for display, or `None` when the section should be hidden.
pub fn related_section<'a>(
    focal: &CatalogItem,
    items: &'a [CatalogItem],
    limit: usize,
) -> Option<Vec<&'a CatalogItem>> {
    let related = related_items(focal, items, limit);
    (!related.is_empty()).then_some(related)
}
