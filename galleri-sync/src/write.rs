//! Whole-file inventory replacement.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SyncError;

/// Path of the temporary file written next to `target`.
pub fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "inventory.json".into());
    name.push(".tmp");
    target.with_file_name(name)
}

/// Write `contents` to `target` by writing a sibling temp file and renaming
/// it over the target. Readers see either the old file or the new one.
pub fn write_atomic(target: &Path, contents: &str) -> Result<(), SyncError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = temp_path(target);
    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, target) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn temp_file_sits_next_to_target() {
        assert_eq!(
            temp_path(Path::new("data/inventory.json")),
            PathBuf::from("data/inventory.json.tmp")
        );
    }

    #[test]
    fn replaces_existing_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("inventory.json");
        fs::write(&target, "old").unwrap();

        write_atomic(&target, "new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("data").join("inventory.json");
        write_atomic(&target, "{}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
    }

    #[test]
    fn failed_rename_keeps_previous_target() {
        let tmp = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let target = tmp.path().join("inventory.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        assert!(write_atomic(&target, "new").is_err());
        assert!(target.join("keep").exists());
        assert!(!temp_path(&target).exists());
    }
}
