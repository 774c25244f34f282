//! Filesystem-backed settings storage.

use std::fs;
use std::path::PathBuf;

use memodeck_core::effects::SettingsStore;
use memodeck_core::errors::StorageError;

/// Settings store keeping one file per key under a base directory.
///
/// Stateless beyond the base path; every operation delegates to the
/// filesystem. Missing files read as `None`.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    /// Base directory for settings files.
    base_path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store rooted at `base_path`.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey {
                reason: "key cannot be empty".to_string(),
            });
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let file_path = self.file_path(key)?;
        if !file_path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&file_path)
            .map_err(|e| StorageError::ReadFailed(format!("failed to read {key}: {e}")))?;
        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let file_path = self.file_path(key)?;
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::WriteFailed(format!("failed to create directory: {e}"))
            })?;
        }
        fs::write(&file_path, value)
            .map_err(|e| StorageError::WriteFailed(format!("failed to write {key}: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf());

        store.set("catalogLn", "\"ru\"").unwrap();
        assert_eq!(store.get("catalogLn").unwrap(), Some("\"ru\"".to_string()));
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf());

        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf());

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().to_path_buf());

        assert!(matches!(
            store.set("", "x"),
            Err(StorageError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.get(""),
            Err(StorageError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_creates_base_directory_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("nested").join("settings"));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }
}
