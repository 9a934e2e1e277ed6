//! Spreadsheet row contract and the row → item transform.
//!
//! Columns, in order:
//!
//! | # | column      | notes                                   |
//! |---|-------------|-----------------------------------------|
//! | 0 | id          | derived from `name` when blank          |
//! | 1 | name        | rows without a name are dropped         |
//! | 2 | description |                                         |
//! | 3 | category    | blank means uncategorized               |
//! | 4 | price       | blank, zero or unparseable: on request  |
//! | 5 | size        | comma-separated labels                  |
//! | 6 | type        | defaults to `Original`                  |
//! | 7 | colors      | comma-separated, lower-cased            |
//! | 8 | images      | comma-separated, defaults to name slug  |
//! | 9 | available   | false only for `false` / `0`            |
//! | 10| featured    | true only for `true` / `1`              |
//! | 11| dateAdded   | defaults to the sync date               |
//! | 12| variants    | comma-separated                         |

use std::collections::HashSet;

use chrono::NaiveDate;

use galleri_core::item::{normalize_colors, split_list};
use galleri_core::{CatalogItem, DEFAULT_TYPE, slugify};

/// Column headers as they appear in the sheet's first row.
pub const COLUMNS: [&str; 13] = [
    "id",
    "name",
    "description",
    "category",
    "price",
    "size",
    "type",
    "colors",
    "images",
    "available",
    "featured",
    "dateAdded",
    "variants",
];

/// One spreadsheet row, cells trimmed and short rows padded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub size: String,
    pub kind: String,
    pub colors: String,
    pub images: String,
    pub available: String,
    pub featured: String,
    pub date_added: String,
    pub variants: String,
}

impl SheetRow {
    /// Build a row from raw cells. Missing trailing cells are empty; cells
    /// past the last column are ignored.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let get = |i: usize| {
            cells
                .get(i)
                .map(|c| c.as_ref().trim().to_string())
                .unwrap_or_default()
        };
        Self {
            id: get(0),
            name: get(1),
            description: get(2),
            category: get(3),
            price: get(4),
            size: get(5),
            kind: get(6),
            colors: get(7),
            images: get(8),
            available: get(9),
            featured: get(10),
            date_added: get(11),
            variants: get(12),
        }
    }

    /// True for a header row (`id` in the first cell).
    pub fn is_header(&self) -> bool {
        self.id.eq_ignore_ascii_case(COLUMNS[0]) && self.name.eq_ignore_ascii_case(COLUMNS[1])
    }

    /// Convert to an item, or `None` when the row has no usable name.
    ///
    /// `today` fills in a blank `dateAdded`.
    pub fn into_item(self, today: NaiveDate) -> Option<CatalogItem> {
        if self.name.is_empty() {
            return None;
        }
        let id = if self.id.is_empty() {
            slugify(&self.name)
        } else {
            self.id
        };
        if id.is_empty() {
            return None;
        }

        let mut images = split_list(&self.images);
        if images.is_empty() {
            let slug = slugify(&self.name);
            images.push(if slug.is_empty() { id.clone() } else { slug });
        }

        Some(CatalogItem {
            description: self.description,
            category: (!self.category.is_empty()).then_some(self.category),
            price: parse_price(&self.price),
            size: self.size,
            kind: if self.kind.is_empty() {
                DEFAULT_TYPE.to_string()
            } else {
                self.kind
            },
            colors: normalize_colors(split_list(&self.colors)),
            images,
            variants: split_list(&self.variants),
            available: parse_available(&self.available),
            featured: parse_featured(&self.featured),
            date_added: Some(if self.date_added.is_empty() {
                today.format("%Y-%m-%d").to_string()
            } else {
                self.date_added
            }),
            id,
            name: self.name,
        })
    }
}

/// A price cell. Spaces are ignored, a decimal comma is accepted and
/// anything after the leading number (`kr`, `:-`) is dropped. A cell that
/// does not start with a positive number means "price on request".
pub fn parse_price(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    let price = leading_number(&cleaned)?;
    (price.is_finite() && price > 0.0).then_some(price)
}

/// The longest prefix of `s` that parses as a number.
fn leading_number(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Available unless the cell says `false` or `0`.
pub fn parse_available(cell: &str) -> bool {
    !(cell.eq_ignore_ascii_case("false") || cell == "0")
}

/// Featured only when the cell says `true` or `1`.
pub fn parse_featured(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true") || cell == "1"
}

/// Transform raw rows into items.
///
/// Header rows and rows without a name are skipped. When two rows share an
/// id the first one is kept.
pub fn transform_rows<S: AsRef<str>>(rows: &[Vec<S>], today: NaiveDate) -> Vec<CatalogItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(rows.len());

    for (index, cells) in rows.iter().enumerate() {
        let row = SheetRow::from_cells(cells);
        if row.is_header() {
            continue;
        }
        let Some(item) = row.into_item(today) else {
            if cells.iter().any(|c| !c.as_ref().trim().is_empty()) {
                log::warn!("Skipping row {}: no name", index + 1);
            }
            continue;
        };
        if !seen.insert(item.id.clone()) {
            log::warn!("Skipping row {}: duplicate id '{}'", index + 1, item.id);
            continue;
        }
        log::debug!("Row {} -> {}", index + 1, item.id);
        items.push(item);
    }

    items
}
