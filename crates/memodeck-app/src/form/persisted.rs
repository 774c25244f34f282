//! Write-through persistence for a field.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use memodeck_core::effects::SettingsStore;
use memodeck_core::errors::StorageError;

use super::field::Field;

/// A [`Field`] whose value survives app restarts.
///
/// Construction reads the stored value under the key and adopts it when it
/// deserializes cleanly; otherwise the constructor default stands and the
/// failure is swallowed. Every later [`set_value`] writes through under the
/// same key. Storage failures never block input; persistence here is
/// best-effort with respect to physical durability.
///
/// [`set_value`]: PersistedField::set_value
pub struct PersistedField<T: Clone> {
    inner: Field<T>,
    store: Arc<dyn SettingsStore>,
    key: String,
}

impl<T> PersistedField<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Wrap `inner`, restoring any value stored under `key`.
    pub fn new(inner: Field<T>, store: Arc<dyn SettingsStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(stored) => inner.restore(stored),
                Err(error) => {
                    warn!(key = %key, %error, "ignoring corrupt stored value");
                }
            },
            Ok(None) => {}
            Err(error) => {
                warn!(key = %key, %error, "settings read failed");
            }
        }
        Self { inner, store, key }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.inner.value()
    }

    /// Whether the user has interacted with the field.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.inner.is_touched()
    }

    /// Current validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.error()
    }

    /// Store `new_value` on the field, then write it through.
    pub fn set_value(&self, new_value: T) {
        self.inner.set_value(new_value);
        if let Err(error) = self.persist() {
            warn!(key = %self.key, %error, "settings write failed");
        }
    }

    /// Mark the field touched without changing its value.
    pub fn touch(&self) {
        self.inner.touch();
    }

    /// The wrapped field, for signal subscriptions.
    pub fn field(&self) -> &Field<T> {
        &self.inner
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.inner.value())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }
}
