//! Browser `localStorage` adapter for the preference store.

use widgetdoc_core::{CoreError, PreferenceStore, Result};

/// Preferences persisted in `window.localStorage`.
///
/// The storage handle is looked up on every call, so the store is a
/// zero-sized value that can be captured freely by event handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage =
            Self::storage().ok_or_else(|| CoreError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("failed to write `{key}`: {e:?}")))
    }
}
