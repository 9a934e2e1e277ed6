//! Shared data model for the gallery: the artwork record, the inventory
//! document written by the sync job, the error taxonomy, and the small
//! lookup tables the presentation layer needs (slugs, colors, image paths,
//! prices, collation).

pub mod collation;
pub mod color;
pub mod error;
pub mod image;
pub mod inventory;
pub mod item;
pub mod price;
pub mod settings;
pub mod slug;

pub use collation::{Collation, CollationParseError};
pub use color::{FALLBACK_COLOR, color_value};
pub use error::{LoadError, NotFoundError, ValidationError};
pub use image::ImageResolver;
pub use inventory::InventoryDocument;
pub use item::{CatalogItem, DEFAULT_TYPE};
pub use price::format_price;
pub use settings::{CatalogSettings, Settings, SettingsError, SyncSettings};
pub use slug::slugify;
