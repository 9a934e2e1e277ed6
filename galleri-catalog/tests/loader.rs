use std::fs;

use galleri_catalog::{InventorySource, load_catalog, load_or_empty, parse_inventory};
use galleri_core::LoadError;
use tempfile::TempDir;

const INVENTORY: &str = r#"{
  "lastUpdated": "2024-05-01T10:00:00.000Z",
  "items": [
    {
      "id": "kar001",
      "name": "Blå Katt",
      "description": "Akvarell",
      "category": "Djur",
      "price": 1200,
      "size": "30x40 cm",
      "type": "Original",
      "colors": ["Blå", "vit"],
      "images": ["kar001", "kar001-2"],
      "variants": [],
      "available": true,
      "featured": true,
      "dateAdded": "2024-04-01"
    },
    {
      "id": "kar002",
      "name": "Gammal post",
      "image": "kar002-old",
      "category": ""
    },
    { "id": "", "name": "No id" },
    { "id": "kar003" },
    { "id": "kar001", "name": "Duplicate" },
    "not an object"
  ]
}"#;

#[test]
fn parses_and_normalizes_items() {
    let catalog = parse_inventory(INVENTORY).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.last_updated(), Some("2024-05-01T10:00:00.000Z"));

    let katt = catalog.get("kar001").unwrap();
    assert_eq!(katt.name, "Blå Katt");
    assert_eq!(katt.colors, vec!["blå", "vit"]);
    assert_eq!(katt.images.len(), 2);
    assert_eq!(katt.price, Some(1200.0));
    assert!(katt.featured);

    let post = catalog.get("kar002").unwrap();
    assert_eq!(post.images, vec!["kar002-old"]);
    assert_eq!(post.category, None);
    assert_eq!(post.kind, "Original");
    assert!(post.available);
    assert!(!post.featured);
    assert_eq!(post.price, None);
}

#[test]
fn first_duplicate_wins() {
    let catalog = parse_inventory(INVENTORY).unwrap();
    assert_eq!(catalog.get("kar001").unwrap().name, "Blå Katt");
}

#[test]
fn missing_items_array_is_empty_catalog() {
    let catalog = parse_inventory(r#"{"lastUpdated": "x"}"#).unwrap();
    assert!(catalog.is_empty());
    let catalog = parse_inventory(r#"{"items": {"a": 1}}"#).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn invalid_json_is_a_load_error() {
    assert!(matches!(parse_inventory("{ items: ["), Err(LoadError::Json(_))));
}

#[test]
fn loads_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("inventory.json");
    fs::write(&path, INVENTORY).unwrap();

    let catalog = load_catalog(&InventorySource::File(path)).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let source = InventorySource::File(tmp.path().join("missing.json"));
    assert!(matches!(load_catalog(&source), Err(LoadError::Io { .. })));
}

#[test]
fn failures_degrade_to_empty_catalog() {
    let tmp = TempDir::new().unwrap();
    let broken = tmp.path().join("broken.json");
    fs::write(&broken, "not json").unwrap();

    assert!(load_or_empty(&InventorySource::File(broken)).is_empty());
    assert!(load_or_empty(&InventorySource::File(tmp.path().join("nope.json"))).is_empty());
}
