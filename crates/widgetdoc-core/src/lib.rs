//! widgetdoc Core Library
//!
//! Catalog loading, filtering, selection and preferences for the widgetdoc
//! documentation browser. Nothing here touches the DOM; the Leptos layer in
//! `widgetdoc-ui` drives these types from event handlers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod model;
pub mod prefs;
pub mod selection;
pub mod state;

pub use catalog::{Catalog, Category};
pub use config::AppConfig;
pub use error::{CoreError, Result};
pub use filter::{ALL_CATEGORIES, filter, filter_indices};
pub use i18n::{Message, text};
pub use model::{Language, Localized, PropertyRecord, Theme, ViewMode, WidgetRecord};
pub use prefs::{MemoryStore, PreferenceStore, Preferences};
pub use selection::reconcile;
pub use state::BrowserState;
