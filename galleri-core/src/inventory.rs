//! The inventory document: the JSON file the sync job writes and the pages read.

use serde::Serialize;

use crate::item::CatalogItem;

/// `{ lastUpdated, items }` as persisted in `data/inventory.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDocument {
    /// RFC 3339 timestamp of the sync run that produced the file.
    pub last_updated: String,
    pub items: Vec<CatalogItem>,
}

/// On-disk shape of one item. Older pages read a single `image` field, so
/// the primary image is written there as well.
#[derive(Serialize)]
struct ItemRecord<'a> {
    #[serde(flatten)]
    item: &'a CatalogItem,
    image: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRecord<'a> {
    last_updated: &'a str,
    items: Vec<ItemRecord<'a>>,
}

impl InventoryDocument {
    pub fn new(last_updated: impl Into<String>, items: Vec<CatalogItem>) -> Self {
        Self {
            last_updated: last_updated.into(),
            items,
        }
    }

    /// Serialize as pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let record = DocumentRecord {
            last_updated: &self.last_updated,
            items: self
                .items
                .iter()
                .map(|item| ItemRecord {
                    item,
                    image: item.primary_image().unwrap_or(&item.id),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_legacy_image_field() {
        let mut item = CatalogItem::new("kar001", "Katt");
        item.images = vec!["kar001".into(), "kar001-2".into()];
        let doc = InventoryDocument::new("2024-05-01T10:00:00.000Z", vec![item]);

        let json: serde_json::Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["lastUpdated"], "2024-05-01T10:00:00.000Z");
        assert_eq!(json["items"][0]["image"], "kar001");
        assert_eq!(json["items"][0]["images"][1], "kar001-2");
        assert_eq!(json["items"][0]["id"], "kar001");
    }

    #[test]
    fn empty_document_serializes() {
        let doc = InventoryDocument::new("2024-05-01T10:00:00.000Z", Vec::new());
        let text = doc.to_json_pretty().unwrap();
        assert!(text.contains("\"items\": []"));
    }
}
