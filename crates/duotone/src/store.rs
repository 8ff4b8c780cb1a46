//! The persisted-preference seam.
//!
//! The preference lives in a key-value store under the fixed
//! [`STORAGE_KEY`]. The controller reads it once at initialization and
//! rewrites it on every toggle; it never deletes it. The store is a trait
//! so the controller can run against real browser storage in the web crate
//! and against [`MemoryStore`] in tests.

use std::collections::HashMap;

use crate::error::StoreError;

/// The key the theme preference is stored under.
pub const STORAGE_KEY: &str = "theme";

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`PreferenceStore`], the default backend for tests.
///
/// A store built with [`MemoryStore::failing`] errors on every access,
/// which is how the storage-failure path gets exercised.
///
/// ```rust
/// use duotone::{MemoryStore, PreferenceStore, STORAGE_KEY};
///
/// let store = MemoryStore::new().with(STORAGE_KEY, "dark");
/// assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    /// An empty, working store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails with
    /// [`StoreError::Backend`].
    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            failing: true,
        }
    }

    /// Seeds an entry, builder style.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing {
            return Err(StoreError::Backend("simulated read failure".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Backend("simulated write failure".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);

        store.set(STORAGE_KEY, "dark").unwrap();
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("dark"));

        store.set(STORAGE_KEY, "light").unwrap();
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn failing_store_errors_on_both_operations() {
        let mut store = MemoryStore::failing();
        assert!(store.get(STORAGE_KEY).is_err());
        assert!(store.set(STORAGE_KEY, "dark").is_err());
    }
}
