//! Read side of the gallery: loading the inventory, filtering, sorting and
//! paginating the grid, and ranking related items for a product page.
//!
//! Everything here is a pure function of an immutable [`Catalog`]; derived
//! views borrow from it and never modify items.

pub mod catalog;
pub mod filter;
pub mod links;
pub mod loader;
pub mod pagination;
pub mod related;
pub mod selection;

pub use catalog::{Catalog, CategoryEntry, DEFAULT_FEATURED_LIMIT};
pub use filter::{
    ALL_CATEGORIES, CATEGORY_PARAM, CatalogView, CategoryFilter, FilterState, SortKey,
    SortKeyParseError, derive_view,
};
pub use links::{category_query, product_id_from_query, product_url};
pub use loader::{InventorySource, load_catalog, load_or_empty, parse_inventory};
pub use pagination::{PageLink, Pagination};
pub use related::{DEFAULT_RELATED_LIMIT, related_items, related_section, score};
pub use selection::{Inquiry, Selection, validate_selection};
