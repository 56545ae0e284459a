//! Key-value persistence behind browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sibling micro-frontends read the same storage keys, so every read and write
//! goes through one capability trait. Browser builds use [`LocalStore`]; tests
//! and non-browser builds use [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Raw trait methods return [`StorageError`]. The guarded helpers (`read`,
//! `write`, `remove`, `clear`) log failures and degrade to `None`/`false` so
//! an unavailable or full storage never takes the drawer down.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Errors produced by a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists in this environment.
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, privacy mode, ...).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Abstract string key-value capability.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the clear fails.
    fn clear(&self) -> Result<(), StorageError>;
}

// =============================================================================
// GUARDED HELPERS
// =============================================================================

/// Read `key`, logging and swallowing any failure.
pub fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(StorageError::Unavailable) => None,
        Err(e) => {
            log::warn!("failed to read {key} from storage: {e}");
            None
        }
    }
}

/// Write `key`; returns whether the value was persisted.
pub fn write(store: &dyn KeyValueStore, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(StorageError::Unavailable) => false,
        Err(e) => {
            log::warn!("failed to save {key} to storage: {e}");
            false
        }
    }
}

/// Remove `key`; returns whether the removal succeeded.
pub fn remove(store: &dyn KeyValueStore, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(StorageError::Unavailable) => false,
        Err(e) => {
            log::warn!("failed to remove {key} from storage: {e}");
            false
        }
    }
}

/// Clear every key; returns whether the clear succeeded.
pub fn clear(store: &dyn KeyValueStore) -> bool {
    match store.clear() {
        Ok(()) => true,
        Err(StorageError::Unavailable) => false,
        Err(e) => {
            log::warn!("failed to clear storage: {e}");
            false
        }
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store used by tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.entries.lock().unwrap_or_else(PoisonError::into_inner);
            for (k, v) in entries {
                map.insert(k.to_owned(), v.to_owned());
            }
        }
        store
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        map.clear();
        Ok(())
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage`, looked up on every call.
///
/// Holding no JS handle keeps this type `Send + Sync` so it can live inside
/// Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn backend_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(key).map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.set_item(key, value).map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.remove_item(key).map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.clear().map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
