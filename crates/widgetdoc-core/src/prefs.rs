//! Theme and language preferences.
//!
//! Preferences live behind [`PreferenceStore`] so the browser's
//! `localStorage` can be swapped for [`MemoryStore`] in tests.

use std::{cell::RefCell, collections::HashMap};

use tracing::{debug, warn};

use crate::{
    config::{SiteConfig, StorageConfig},
    error::Result,
    model::{Language, Theme},
};

/// A string key/value store that outlives the page.
pub trait PreferenceStore {
    /// Read a value. Read failures are reported as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used in tests and when no browser storage is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The two user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Read both preferences, falling back to the configured defaults when a
    /// value is missing or unrecognized.
    pub fn load(store: &impl PreferenceStore, keys: &StorageConfig, defaults: &SiteConfig) -> Self {
        let theme = read_or(store, &keys.theme_key, defaults.default_theme);
        let language = read_or(store, &keys.language_key, defaults.default_language);
        debug!(%theme, %language, "Preferences loaded");
        Self { theme, language }
    }

    /// Flip the theme and persist it. The in-memory value changes even when
    /// the write fails.
    pub fn toggle_theme(&mut self, store: &impl PreferenceStore, keys: &StorageConfig) -> Theme {
        self.theme = self.theme.toggled();
        persist(store, &keys.theme_key, self.theme.as_str());
        self.theme
    }

    /// Flip the language and persist it. The in-memory value changes even
    /// when the write fails.
    pub fn toggle_language(
        &mut self,
        store: &impl PreferenceStore,
        keys: &StorageConfig,
    ) -> Language {
        self.language = self.language.toggled();
        persist(store, &keys.language_key, self.language.tag());
        self.language
    }
}

fn read_or<T>(store: &impl PreferenceStore, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!(key, value = %raw, "Ignoring unrecognized stored preference");
            default
        }),
        None => default,
    }
}

fn persist(store: &impl PreferenceStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!(key, error = %e, "Failed to persist preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(CoreError::storage(format!("cannot write `{key}`")))
        }
    }

    fn keys() -> StorageConfig {
        StorageConfig::default()
    }

    #[test]
    fn test_defaults_when_store_empty() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store, &keys(), &SiteConfig::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        let store = MemoryStore::new();
        store.set("theme", "solarized").unwrap();
        store.set("language", "fr").unwrap();

        let prefs = Preferences::load(&store, &keys(), &SiteConfig::default());
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_stored_values_are_used() {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        store.set("language", "ar").unwrap();

        let prefs = Preferences::load(&store, &keys(), &SiteConfig::default());
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Ar);
    }

    #[test]
    fn test_theme_toggle_survives_reload() {
        let store = MemoryStore::new();
        let mut prefs = Preferences::load(&store, &keys(), &SiteConfig::default());

        assert_eq!(prefs.toggle_theme(&store, &keys()), Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        let reloaded = Preferences::load(&store, &keys(), &SiteConfig::default());
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.language, Language::En);
    }

    #[test]
    fn test_toggles_are_independent() {
        let store = MemoryStore::new();
        let mut prefs = Preferences::default();

        prefs.toggle_language(&store, &keys());
        assert_eq!(store.get("language").as_deref(), Some("ar"));
        assert_eq!(store.get("theme"), None);

        prefs.toggle_language(&store, &keys());
        assert_eq!(store.get("language").as_deref(), Some("en"));
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_custom_keys() {
        let store = MemoryStore::new();
        let keys = StorageConfig {
            theme_key: "wd.theme".to_string(),
            language_key: "wd.lang".to_string(),
        };
        let mut prefs = Preferences::default();
        prefs.toggle_theme(&store, &keys);

        assert_eq!(store.get("wd.theme").as_deref(), Some("dark"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_failed_write_still_toggles() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_theme(&ReadOnlyStore, &keys()), Theme::Dark);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_configured_defaults() {
        let defaults = SiteConfig {
            default_language: Language::Ar,
            default_theme: Theme::Dark,
            ..SiteConfig::default()
        };
        let prefs = Preferences::load(&MemoryStore::new(), &keys(), &defaults);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Ar);
    }
}
