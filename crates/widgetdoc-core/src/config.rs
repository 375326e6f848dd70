//! Application configuration.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    model::{Language, Theme, ViewMode},
};

/// Configuration shipped with the application.
const EMBEDDED_CONFIG: &str = include_str!("../../../widgetdoc.toml");

/// Main configuration structure for widgetdoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Startup defaults.
    #[serde(default)]
    pub site: SiteConfig,

    /// Preference store keys.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Presentation tuning.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Values used before the user has expressed a preference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Language used when none is stored.
    #[serde(default)]
    pub default_language: Language,

    /// Theme used when none is stored.
    #[serde(default)]
    pub default_theme: Theme,

    /// Initial view mode.
    #[serde(default)]
    pub default_view: ViewMode,
}

/// Keys under which preferences are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    #[serde(default = "default_language_key")]
    pub language_key: String,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the "copied" indicator stays visible, in milliseconds.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Number of description characters shown in sidebar previews.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

// Default value functions
fn default_theme_key() -> String {
    "theme".to_string()
}

fn default_language_key() -> String {
    "language".to_string()
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_preview_chars() -> usize {
    40
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
            language_key: default_language_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: default_copy_feedback_ms(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl AppConfig {
    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.storage.theme_key.is_empty() {
            return Err(CoreError::config("storage.theme_key cannot be empty"));
        }

        if self.storage.language_key.is_empty() {
            return Err(CoreError::config("storage.language_key cannot be empty"));
        }

        if self.storage.theme_key == self.storage.language_key {
            return Err(CoreError::config(
                "storage.theme_key and storage.language_key must differ",
            ));
        }

        if self.ui.preview_chars == 0 {
            return Err(CoreError::config("ui.preview_chars must be positive"));
        }

        if self.ui.copy_feedback_ms == 0 {
            tracing::warn!("ui.copy_feedback_ms is 0, the copied indicator will not be visible");
        }

        Ok(())
    }
}
