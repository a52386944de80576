//! Key-value store wrapper with automatic serialization.

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::backend::{Backend, FileBackend, MemoryBackend};
use crate::StorageError;

/// Type-safe store over a [`Backend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Store {
    backend: Box<dyn Backend>,
}

impl Store {
    /// Wrap an existing backend.
    pub fn with_backend(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Open a process-local store. Nothing survives the process.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Open a store that keeps one JSON file per key under `dir`.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::open_dir("/home/me/.local/share/aythana")?;
    /// ```
    pub fn open_dir(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Ok(Self::with_backend(FileBackend::open(dir)?))
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist, and a
    /// [`StorageError::SerializeError`] if the stored document does not
    /// parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = store.get("aythanaCart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        validate_key(key)?;
        match self.backend.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get the raw stored document without parsing it.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        self.backend.get(key)
    }

    /// Set a value in the store, replacing any previous document.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("aythanaCart", &items)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        validate_key(key)?;
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)?;
        tracing::trace!(key, bytes = raw.len(), "stored value");
        Ok(())
    }

    /// Delete a value. Deleting a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.backend.delete(key)?;
        tracing::trace!(key, "deleted value");
        Ok(())
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        self.backend.exists(key)
    }

    /// Get all keys in the store, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = self.backend.keys()?;
        keys.sort();
        Ok(keys)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Check that a key is usable by every backend.
///
/// Keys must be non-empty, must not start with `.`, and may only contain
/// ASCII alphanumerics, `-`, `_` and `.`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
