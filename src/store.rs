//! Persisted preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The manager only needs get/set of a string by key. Browser builds back this
//! with `localStorage`; tests and non-browser hosts use [`MemoryStore`].

use std::collections::HashMap;

use crate::error::BackendError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Durable string-by-key storage scoped to one browsing context.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Write `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the underlying store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError>;
}

/// In-process store. Survives for the lifetime of the value only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one entry, as if written by an earlier page load.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` for the current origin.
#[cfg(feature = "hydrate")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unavailable`] outside a window or when the
    /// browser denies storage access (private mode, disabled cookies).
    pub fn open() -> Result<Self, BackendError> {
        let unavailable = BackendError::Unavailable { backend: "localStorage" };
        let Some(window) = web_sys::window() else {
            return Err(unavailable);
        };
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) | Err(_) => Err(unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        self.storage
            .get_item(key)
            .map_err(|err| BackendError::Store { key: key.to_owned(), message: crate::web::describe(&err) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| BackendError::Store { key: key.to_owned(), message: crate::web::describe(&err) })
    }
}
