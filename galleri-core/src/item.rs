//! The artwork record.

use serde::{Deserialize, Serialize};

/// Classification used when the source leaves `type` blank.
pub const DEFAULT_TYPE: &str = "Original";

/// One artwork in the inventory.
///
/// Items are built once per load (by the loader or the sync job) and never
/// mutated afterwards. Every retained item has a non-empty `id`, `name` and
/// `images` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable identifier, used in product URLs.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-text category label; matched case-insensitively.
    #[serde(default)]
    pub category: Option<String>,
    /// `None` means "price on request".
    #[serde(default)]
    pub price: Option<f64>,
    /// Comma-separated size labels, or empty.
    #[serde(default)]
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Lower-cased color names in source order.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Image references; the first is the primary image.
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<String>,
    pub available: bool,
    pub featured: bool,
    #[serde(default)]
    pub date_added: Option<String>,
}

impl CatalogItem {
    /// Create an item with the given id and name and default values elsewhere.
    ///
    /// The id doubles as the image reference until images are set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            images: vec![id.clone()],
            id,
            name: name.into(),
            description: String::new(),
            category: None,
            price: None,
            size: String::new(),
            kind: DEFAULT_TYPE.to_string(),
            colors: Vec::new(),
            variants: Vec::new(),
            available: true,
            featured: false,
            date_added: None,
        }
    }

    /// The primary image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Individual size labels parsed from the comma-separated `size` field.
    pub fn sizes(&self) -> Vec<&str> {
        self.size
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }
}

/// Split a comma-separated cell into trimmed, non-empty entries.
pub fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize color names: trimmed, lower-cased, blanks removed.
pub fn normalize_colors<I, S>(colors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    colors
        .into_iter()
        .map(|c| c.as_ref().trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}
