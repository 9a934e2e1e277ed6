use std::collections::HashSet;

use galleri_catalog::{DEFAULT_RELATED_LIMIT, related_items, related_section, score};
use galleri_core::CatalogItem;

fn item(id: &str, kind: &str, colors: &[&str], category: Option<&str>) -> CatalogItem {
    let mut item = CatalogItem::new(id, id.to_uppercase());
    item.kind = kind.to_string();
    item.colors = colors.iter().map(|c| c.to_string()).collect();
    item.category = category.map(str::to_string);
    item
}

fn ids(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn scores_type_colors_and_category() {
    let focal = item("a", "Original", &["blå", "röd"], Some("Djur"));
    assert_eq!(score(&focal, &item("b", "Original", &["blå"], None)), 5);
    assert_eq!(score(&focal, &item("c", "Print", &["röd"], None)), 2);
    assert_eq!(score(&focal, &item("d", "Print", &["blå", "röd"], Some("Djur"))), 5);
    assert_eq!(score(&focal, &item("e", "Print", &[], Some("Landskap"))), 0);
}

#[test]
fn duplicate_focal_colors_count_once() {
    let focal = item("a", "Print", &["blå", "blå"], None);
    assert_eq!(score(&focal, &item("b", "Original", &["blå"], None)), 2);
}

#[test]
fn missing_categories_do_not_match() {
    let focal = item("a", "Print", &[], None);
    assert_eq!(score(&focal, &item("b", "Original", &[], None)), 0);
}

#[test]
fn ranks_by_score_then_backfills() {
    let items = vec![
        item("a", "Original", &["blå", "röd"], Some("Djur")),
        item("x", "Print", &[], None),
        item("c", "Print", &["röd"], None),
        item("b", "Original", &["blå"], None),
        item("y", "Print", &["grön"], None),
    ];
    let related = related_items(&items[0], &items, DEFAULT_RELATED_LIMIT);
    assert_eq!(ids(&related), vec!["b", "c", "x", "y"]);
}

#[test]
fn ties_keep_catalog_order() {
    let items = vec![
        item("a", "Original", &[], None),
        item("p", "Original", &[], None),
        item("q", "Original", &[], None),
        item("r", "Original", &[], None),
    ];
    let related = related_items(&items[0], &items, 2);
    assert_eq!(ids(&related), vec!["p", "q"]);
}

#[test]
fn never_returns_focal_or_duplicates() {
    let items = vec![
        item("a", "Original", &["blå"], Some("Djur")),
        item("b", "Original", &["blå"], Some("Djur")),
        item("a", "Original", &["blå"], Some("Djur")),
        item("b", "Print", &[], None),
        item("c", "Print", &[], None),
    ];
    let related = related_items(&items[0], &items, 10);
    let got = ids(&related);
    assert!(!got.contains(&"a".to_string()));
    let unique: HashSet<&String> = got.iter().collect();
    assert_eq!(unique.len(), got.len());
    assert_eq!(got, vec!["b", "c"]);
}

#[test]
fn respects_limit() {
    let items: Vec<CatalogItem> = (0..10)
        .map(|n| item(&format!("i{n}"), "Original", &[], None))
        .collect();
    assert_eq!(related_items(&items[0], &items, 4).len(), 4);
    assert!(related_items(&items[0], &items, 0).is_empty());
}

#[test]
fn section_hidden_when_nothing_else_exists() {
    let items = vec![item("a", "Original", &[], None)];
    assert!(related_section(&items[0], &items, DEFAULT_RELATED_LIMIT).is_none());

    let items = vec![item("a", "Original", &[], None), item("b", "Print", &[], None)];
    let section = related_section(&items[0], &items, DEFAULT_RELATED_LIMIT).unwrap();
    assert_eq!(ids(&section), vec!["b"]);
}
