//! Preference persistence seam.
//!
//! The persisted preference lives in an origin-scoped durable key-value
//! store that outlives the page. The store is injected into the controller
//! rather than reached for as an ambient global, so tests (and non-browser
//! hosts) can supply an in-memory one.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// The single key this component owns in the store. Value is one of the
/// literal strings `light` or `dark`; no other keys, no versioning.
pub const STORAGE_KEY: &str = "theme";

/// Durable, synchronous key-value store surviving page reloads.
pub trait PreferenceStore {
    /// Read a value. Unavailable storage reads the same as an absent key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Failure (quota, security) is reported but callers are
    /// expected to treat it as a degraded condition, not a fatal one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and non-browser hosts. Interior mutability
/// because the component is single-threaded by contract.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, simulating a full or sealed store.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::WriteRejected("writes rejected".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(STORAGE_KEY), None);
        store.set(STORAGE_KEY, "dark").unwrap();
        assert_eq!(store.get(STORAGE_KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_store_rejected_write_leaves_value() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "light").unwrap();
        store.reject_writes(true);
        assert!(store.set(STORAGE_KEY, "dark").is_err());
        assert_eq!(store.get(STORAGE_KEY), Some("light".to_string()));
    }
}
