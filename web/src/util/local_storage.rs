//! Browser `localStorage` wrapper with JSON value encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preference entries survive page loads as JSON text under namespaced keys.
//! `LocalStorageService` owns the encoding; the raw string medium sits behind
//! `KeyValueStore` so the same service runs against the browser store in the
//! WASM bundle and against `MemoryStorage` in native tests.
//!
//! TRADE-OFFS
//! ==========
//! Without the `hydrate` feature `BrowserStorage` is an always-empty store
//! that discards writes, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Namespaced keys for every preference entry the app persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The theme the user last switched to (or the one resolved on first run).
    EnabledTheme,
}

impl StorageKey {
    /// Raw `localStorage` key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnabledTheme => "taskrs.enabled-theme",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
    #[error("failed to encode value: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored value under {key} is not valid: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string key-value medium.
pub trait KeyValueStore {
    /// Read the text stored at `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, replacing any previous text.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be reached or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage`. Looked up on every call so the handle stays `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn browser_local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text currently stored at `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// JSON-encoding accessor over a `KeyValueStore`.
///
/// Holds no state of its own; each call is as consistent as the backing
/// medium makes it.
#[derive(Debug, Default)]
pub struct LocalStorageService<S> {
    store: S,
}

impl<S: KeyValueStore> LocalStorageService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serialize `value` and write it under `key`, returning `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be encoded or the write fails.
    pub fn set_value<T: Serialize>(&self, key: &str, value: T) -> Result<T, StorageError> {
        let raw = serde_json::to_string(&value).map_err(StorageError::Serialize)?;
        self.store.set_item(key, &raw)?;
        Ok(value)
    }

    /// Read and decode the value under `key`; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Deserialize` when the stored text does not
    /// decode as `T`.
    pub fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Deserialize { key: key.to_owned(), source })
    }

    /// Delete `key` and return what was stored there.
    ///
    /// The current value is decoded first; if that fails the key is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value does not decode or the delete
    /// fails.
    pub fn remove_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let value = self.get_value(key)?;
        self.store.remove_item(key)?;
        Ok(value)
    }
}
