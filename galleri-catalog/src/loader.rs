//! Catalog loading from the inventory JSON document.
//!
//! The document is read defensively: each entry in `items` is decoded on its
//! own, loosely typed fields are coerced, and entries without an id or name
//! are dropped with a warning instead of failing the whole load.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::Value;

use galleri_core::item::{normalize_colors, split_list};
use galleri_core::{CatalogItem, DEFAULT_TYPE, LoadError};

use crate::catalog::Catalog;

/// Where the inventory document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    File(PathBuf),
    Url(String),
}

impl InventorySource {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    fn read(&self) -> Result<String, LoadError> {
        match self {
            Self::File(path) => read_file(path),
            Self::Url(url) => fetch_url(url),
        }
    }
}

impl std::fmt::Display for InventorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path.display().to_string(), e))
}

fn fetch_url(url: &str) -> Result<String, LoadError> {
    let response =
        reqwest::blocking::get(url).map_err(|e| LoadError::http(url, e.to_string()))?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response
        .text()
        .map_err(|e| LoadError::http(url, e.to_string()))
}

/// Load the catalog, reporting failures.
pub fn load_catalog(source: &InventorySource) -> Result<Catalog, LoadError> {
    let text = source.read()?;
    let catalog = parse_inventory(&text)?;
    log::debug!("Loaded {} items from {}", catalog.len(), source);
    Ok(catalog)
}

/// Load the catalog, degrading to an empty one on failure.
///
/// An empty catalog is a valid state; the failure is only logged.
pub fn load_or_empty(source: &InventorySource) -> Catalog {
    match load_catalog(source) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Could not load inventory: {e}");
            Catalog::empty()
        }
    }
}

/// Parse an inventory document of shape `{ lastUpdated, items: [...] }`.
///
/// Only invalid JSON is an error; a missing or non-array `items` gives an
/// empty catalog.
pub fn parse_inventory(text: &str) -> Result<Catalog, LoadError> {
    let doc: Value = serde_json::from_str(text)?;

    let last_updated = doc
        .get("lastUpdated")
        .and_then(Value::as_str)
        .map(str::to_string);

    let Some(entries) = doc.get("items").and_then(Value::as_array) else {
        log::warn!("Inventory has no items array");
        return Ok(Catalog::empty().with_last_updated(last_updated));
    };

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(item) = decode_item(entry) else {
            log::warn!("Skipping inventory entry {index}: missing id or name");
            continue;
        };
        if !seen.insert(item.id.clone()) {
            log::warn!("Skipping inventory entry {index}: duplicate id '{}'", item.id);
            continue;
        }
        items.push(item);
    }

    Ok(Catalog::new(items).with_last_updated(last_updated))
}

/// Decode one entry, or `None` if it is not an object or lacks id/name.
fn decode_item(entry: &Value) -> Option<CatalogItem> {
    let obj = entry.as_object()?;
    let field = |key: &str| obj.get(key).unwrap_or(&Value::Null);

    let id = text(field("id"))?;
    let name = text(field("name"))?;

    let mut images = list(field("images"));
    if images.is_empty() {
        // Older documents carry a single `image` field.
        images = text(field("image")).into_iter().collect();
    }
    if images.is_empty() {
        images.push(id.clone());
    }

    Some(CatalogItem {
        description: text(field("description")).unwrap_or_default(),
        category: text(field("category")),
        price: price(field("price")),
        size: text(field("size")).unwrap_or_default(),
        kind: text(field("type")).unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        colors: normalize_colors(list(field("colors"))),
        images,
        variants: list(field("variants")),
        available: flag(field("available")).unwrap_or(true),
        featured: flag(field("featured")).unwrap_or(false),
        date_added: text(field("dateAdded")),
        id,
        name,
    })
}

/// Non-empty trimmed text from a string or number.
fn text(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

/// A list from a JSON array of strings, or a comma-separated string.
fn list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries.iter().filter_map(text).collect(),
        Value::String(s) => split_list(s),
        _ => Vec::new(),
    }
}

/// A positive price from a number or numeric string.
fn price(value: &Value) -> Option<f64> {
    let p = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(' ', "").replace(',', ".").parse().ok()?,
        _ => return None,
    };
    (p.is_finite() && p > 0.0).then_some(p)
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
