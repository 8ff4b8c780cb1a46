//! `localStorage`-backed preference store.

use duotone::{PreferenceStore, StoreError};
use wasm_bindgen::JsValue;

/// [`PreferenceStore`] over the window's `localStorage`.
///
/// The storage handle is looked up per operation rather than held: access
/// can be denied at any time (private browsing, site settings), and a fresh
/// lookup keeps each failure independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.backend()?.get_item(key).map_err(into_store_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend()?.set_item(key, value).map_err(into_store_error)
    }
}

fn into_store_error(value: JsValue) -> StoreError {
    StoreError::Backend(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
