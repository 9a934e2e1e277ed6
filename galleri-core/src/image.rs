//! Image reference to path resolution.

use crate::item::CatalogItem;

/// Maps bare image references (`"kar001"`) to site-relative paths
/// (`"images/artworks/kar001.jpg"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    pub base_dir: String,
    pub extension: String,
    /// Returned for empty references.
    pub placeholder: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self {
            base_dir: "images/artworks".to_string(),
            extension: "jpg".to_string(),
            placeholder: "images/placeholder.jpg".to_string(),
        }
    }
}

impl ImageResolver {
    pub fn new(base_dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            extension: extension.into(),
            ..Self::default()
        }
    }

    /// Resolve one reference. References that already contain a path
    /// separator are used as-is.
    pub fn resolve(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty() {
            return self.placeholder.clone();
        }
        if reference.contains('/') || reference.contains('\\') {
            return reference.to_string();
        }
        let base = self.base_dir.trim_end_matches('/');
        let ext = self.extension.trim_start_matches('.');
        if base.is_empty() {
            format!("{reference}.{ext}")
        } else {
            format!("{base}/{reference}.{ext}")
        }
    }

    /// Path of the item's primary image, or the placeholder.
    pub fn primary(&self, item: &CatalogItem) -> String {
        self.resolve(item.primary_image().unwrap_or(""))
    }

    /// Paths of all of the item's images, never empty.
    pub fn all(&self, item: &CatalogItem) -> Vec<String> {
        if item.images.is_empty() {
            return vec![self.placeholder.clone()];
        }
        item.images.iter().map(|r| self.resolve(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_reference_gets_dir_and_extension() {
        let r = ImageResolver::default();
        assert_eq!(r.resolve("kar001"), "images/artworks/kar001.jpg");
    }

    #[test]
    fn paths_are_kept() {
        let r = ImageResolver::default();
        assert_eq!(r.resolve("uploads/x.png"), "uploads/x.png");
        assert_eq!(r.resolve("C:\\x.png"), "C:\\x.png");
    }

    #[test]
    fn empty_reference_is_placeholder() {
        let r = ImageResolver::default();
        assert_eq!(r.resolve("  "), "images/placeholder.jpg");
    }

    #[test]
    fn custom_dir_and_extension() {
        let r = ImageResolver::new("img/", ".webp");
        assert_eq!(r.resolve("a"), "img/a.webp");
    }

    #[test]
    fn item_without_images_gets_placeholder() {
        let r = ImageResolver::default();
        let mut item = CatalogItem::new("a", "A");
        item.images.clear();
        assert_eq!(r.primary(&item), "images/placeholder.jpg");
        assert_eq!(r.all(&item), vec!["images/placeholder.jpg".to_string()]);
    }
}
