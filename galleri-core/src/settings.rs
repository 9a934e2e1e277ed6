//! Shared settings file (`~/.config/galleri/settings.toml`).
//!
//! The CLI and the sync job read the same file so that the inventory
//! location, page size and collation are consistent between them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collation::Collation;
use crate::image::ImageResolver;

/// Inventory path used when nothing else is configured.
pub const DEFAULT_INVENTORY: &str = "data/inventory.json";

/// Gallery grid page size.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sheet range read by the sync job: the `Inventory` tab, columns A–M,
/// skipping the header row.
pub const DEFAULT_SHEET_RANGE: &str = "Inventory!A2:M";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub sync: SyncSettings,
}

/// `[catalog]`: how the pages read and present the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Path or `http(s)` URL of the inventory document.
    pub inventory: String,
    pub page_size: usize,
    pub collation: Collation,
    pub image_dir: String,
    pub image_extension: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        let images = ImageResolver::default();
        Self {
            inventory: DEFAULT_INVENTORY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            collation: Collation::default(),
            image_dir: images.base_dir,
            image_extension: images.extension,
        }
    }
}

impl CatalogSettings {
    pub fn image_resolver(&self) -> ImageResolver {
        ImageResolver::new(&self.image_dir, &self.image_extension)
    }

    /// Page size, never zero.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// `[sync]`: where the sync job reads rows and writes the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub sheet_id: Option<String>,
    pub api_key: Option<String>,
    pub range: String,
    pub output: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            sheet_id: None,
            api_key: None,
            range: DEFAULT_SHEET_RANGE.to_string(),
            output: DEFAULT_INVENTORY.to_string(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/galleri/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("galleri").join("settings.toml")
}

/// Load settings from a specific file. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the shared settings file.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load the shared settings file, falling back to defaults with a warning
/// if it cannot be read or parsed.
pub fn load_settings_or_default() -> Settings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}
