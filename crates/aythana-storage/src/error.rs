//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to (de)serialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a backend operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Key is empty or contains characters the backend cannot hold.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::StoreError(e.to_string())
    }
}
