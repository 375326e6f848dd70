//! Error types for the widgetdoc core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for widgetdoc.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog document is structurally valid JSON but breaks a catalog rule.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Preference store read/write failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON decoding error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decoding error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    /// Create a new storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("empty storage key");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("empty storage key"));
    }

    #[test]
    fn test_catalog_error() {
        let err = CoreError::catalog("duplicate widget id `text`");
        assert!(err.to_string().contains("Catalog error"));
        assert!(err.to_string().contains("`text`"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("[site").unwrap_err();
        let err: CoreError = toml_err.into();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
