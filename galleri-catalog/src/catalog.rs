//! The loaded, immutable item list and the lookups built directly on it.

use std::collections::HashSet;

use galleri_core::{CatalogItem, Collation, NotFoundError, slugify};

/// How many items the home page shows as featured works.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// The full inventory for one session.
///
/// Created once per load and replaced wholesale on reload; never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    last_updated: Option<String>,
}

/// A category as shown in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Display name, as first spelled in the inventory.
    pub name: String,
    /// Value used in the `kategori` query parameter.
    pub slug: String,
}

impl Catalog {
    /// Wrap already-normalized items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            last_updated: None,
        }
    }

    pub fn with_last_updated(mut self, last_updated: Option<String>) -> Self {
        self.last_updated = last_updated;
        self
    }

    /// An empty catalog, the degraded state after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `lastUpdated` from the inventory document, if present.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up the product named by the detail page's `id` parameter.
    pub fn find_item(&self, id: Option<&str>) -> Result<&CatalogItem, NotFoundError> {
        let id = id.map(str::trim).unwrap_or("");
        if id.is_empty() {
            return Err(NotFoundError::MissingId);
        }
        self.get(id)
            .ok_or_else(|| NotFoundError::UnknownId(id.to_string()))
    }

    /// Distinct categories, sorted by `collation`.
    ///
    /// Categories differing only in case are listed once, under the first
    /// spelling found.
    pub fn categories(&self, collation: Collation) -> Vec<CategoryEntry> {
        let mut seen = HashSet::new();
        let mut entries: Vec<CategoryEntry> = self
            .items
            .iter()
            .filter_map(|item| item.category.as_deref())
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(name.to_lowercase()))
            .map(|name| CategoryEntry {
                name: name.to_string(),
                slug: slugify(name),
            })
            .collect();
        entries.sort_by(|a, b| collation.compare(&a.name, &b.name));
        entries
    }

    /// Works for the home page: the first `limit` featured items, or the
    /// first `limit` items when nothing is marked featured.
    pub fn featured(&self, limit: usize) -> Vec<&CatalogItem> {
        let featured: Vec<&CatalogItem> = self
            .items
            .iter()
            .filter(|item| item.featured)
            .take(limit)
            .collect();
        if !featured.is_empty() {
            return featured;
        }
        self.items.iter().take(limit).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
