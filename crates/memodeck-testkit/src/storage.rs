//! In-memory settings storage for tests.

use std::collections::HashMap;

use parking_lot::Mutex;

use memodeck_core::effects::SettingsStore;
use memodeck_core::errors::StorageError;

/// Settings store backed by a hash map.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `pairs`.
    pub fn seeded(pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        let data = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            data: Mutex::new(data),
        }
    }

    /// Snapshot of the value currently stored under `key`.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.data.lock().get(key).cloned()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings store whose every operation fails.
///
/// Exercises the best-effort policy: callers must keep working when the
/// backing medium is gone.
#[derive(Debug, Default)]
pub struct BrokenSettingsStore;

impl SettingsStore for BrokenSettingsStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::ReadFailed("store offline".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("store offline".to_string()))
    }
}
