//! Error types shared across the memodeck workspace.
//!
//! Every failure in the catalog core is data surfaced to the frontend; none
//! of these are fatal to the process.

use thiserror::Error;

/// Durable settings-store failures.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key is not acceptable to the backing store.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected.
        reason: String,
    },
    /// Reading from the backing medium failed.
    #[error("read failed: {0}")]
    ReadFailed(String),
    /// Writing to the backing medium failed.
    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Catalog transport failures.
///
/// `Clone` is load-bearing: a rejected fetch stays cached inside a shared
/// future, and every later caller observes the same error value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not complete.
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but could not be interpreted.
    #[error("malformed payload: {0}")]
    Payload(String),
}

impl FetchError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a malformed-payload error.
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload(message.into())
    }
}

/// Host platform failures.
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    /// The host clipboard rejected the write.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Share-workflow failures.
#[derive(Debug, Clone, Error)]
pub enum ShareError {
    /// No bot application URL is configured, so no link can be composed.
    #[error("bot app URL is not configured")]
    MissingBotUrl,
    /// The share-id request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The host platform refused an operation.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::network("connection reset");
        assert_eq!(err.to_string(), "network error: connection reset");
    }

    #[test]
    fn test_share_error_wraps_fetch() {
        let err: ShareError = FetchError::payload("missing shareId").into();
        assert_eq!(err.to_string(), "malformed payload: missing shareId");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::InvalidKey {
            reason: "empty".to_string(),
        };
        assert_eq!(err.to_string(), "invalid key: empty");
    }
}
