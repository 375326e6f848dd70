//! Widget records and the small enums shared by every layer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (primary).
    #[default]
    En,
    /// Arabic (secondary, right-to-left).
    Ar,
}

impl Language {
    /// Language tag as stored and as written to the `lang` attribute.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub const fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// The other language.
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

/// How the visible records are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    /// Single active record.
    Detail,
}

/// A stored string that does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value `{0}`")]
pub struct UnknownValue(pub String);

/// A value available in both display languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Localized<T> {
    /// Pick the value for a language.
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// A documented constructor parameter of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Parameter name.
    pub name: String,

    /// Free-text type label such as `TextStyle` or `List<Widget>`.
    #[serde(rename = "type")]
    pub type_label: String,

    /// What the parameter does.
    pub description: Localized<String>,
}

/// One documented widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRecord {
    /// Unique, stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Icon glyph (usually a single emoji).
    pub icon: String,

    /// Category label, e.g. "Layout Widget".
    pub category: String,

    pub description: Localized<String>,

    /// Ordered constructor parameters.
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,

    /// Example source code.
    pub code: String,

    /// Usage tips, in display order.
    #[serde(default)]
    pub tips: Localized<Vec<String>>,
}
