//! widgetdoc UI Components
//!
//! Leptos components for the widgetdoc frontend.
//!
//! # Components
//!
//! ## Chrome
//! - [`Header`] - Title plus theme, language and sidebar toggles
//! - [`SearchBar`] - Search input with a clear button
//! - [`CategorySidebar`] / [`CategoryChips`] - Category filters with counts
//!
//! ## Content
//! - [`WidgetCards`] - Grid or list of widget summaries
//! - [`WidgetDetail`] - Full documentation for one widget
//! - [`CodeBlock`] - Line-numbered example code with copy-to-clipboard
//! - [`EmptyState`] - Shown when nothing matches
//! - [`WidgetSidebar`] - Quick navigation with its own search
//!
//! ## Browser glue
//! - [`LocalStorageStore`] - `localStorage`-backed preference store
//! - [`apply_theme`] / [`apply_language`] - Document root effects
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use widgetdoc_core::Language;
//! use widgetdoc_ui::SearchBar;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let query = RwSignal::new(String::new());
//!     let language = Signal::derive(|| Language::En);
//!
//!     view! {
//!         <SearchBar query=query on_change=Callback::new(move |t| query.set(t)) language=language />
//!     }
//! }
//! ```

pub mod cards;
pub mod category;
pub mod code_block;
pub mod detail;
pub mod document;
pub mod header;
pub mod search;
pub mod sidebar;
pub mod storage;

pub use cards::{EmptyState, WidgetCards};
pub use category::{CategoryChips, CategorySidebar};
pub use code_block::CodeBlock;
pub use detail::WidgetDetail;
pub use document::{apply_language, apply_theme};
pub use header::Header;
pub use search::SearchBar;
pub use sidebar::WidgetSidebar;
pub use storage::LocalStorageStore;
