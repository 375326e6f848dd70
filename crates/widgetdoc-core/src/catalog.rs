//! The fixed widget catalog.
//!
//! The catalog is decoded once from a JSON document, validated, and never
//! mutated afterwards. Everything else in the crate borrows from it.

use std::{collections::HashSet, sync::OnceLock};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{CoreError, Result},
    filter::{ALL_CATEGORIES, matches_search},
    i18n::{Message, text},
    model::{Language, WidgetRecord},
};

/// Catalog document compiled into the application.
const EMBEDDED_CATALOG: &str = include_str!("../../../data/widgets.json");

/// Supported catalog document version.
pub const CATALOG_VERSION: u32 = 1;

static EMBEDDED: OnceLock<Catalog> = OnceLock::new();

/// On-disk shape of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    version: u32,
    widgets: Vec<WidgetRecord>,
}

/// An immutable, ordered set of widget records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    widgets: Vec<WidgetRecord>,
}

/// A category entry for the category filter, with its live match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Either [`ALL_CATEGORIES`] or a category label from the catalog.
    pub id: String,

    /// Number of records in this category matching the current search.
    pub count: usize,
}

impl Category {
    /// Whether this is the synthetic "all widgets" entry.
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORIES
    }

    /// Display label. Catalog labels are shown as-is in both languages.
    pub fn label(&self, language: Language) -> &str {
        if self.is_all() {
            text(language, Message::AllWidgets)
        } else {
            &self.id
        }
    }
}

impl Catalog {
    /// Build a catalog from records, enforcing unique non-empty ids and names.
    pub fn new(widgets: Vec<WidgetRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(widgets.len());
        for widget in &widgets {
            if widget.id.is_empty() {
                return Err(CoreError::catalog(format!(
                    "widget `{}` has an empty id",
                    widget.name
                )));
            }
            if widget.id == ALL_CATEGORIES {
                return Err(CoreError::catalog(format!(
                    "widget id `{ALL_CATEGORIES}` is reserved"
                )));
            }
            if widget.name.is_empty() {
                return Err(CoreError::catalog(format!(
                    "widget `{}` has an empty name",
                    widget.id
                )));
            }
            if widget.category == ALL_CATEGORIES {
                return Err(CoreError::catalog(format!(
                    "widget `{}` uses the reserved category `{ALL_CATEGORIES}`",
                    widget.id
                )));
            }
            if !seen.insert(widget.id.as_str()) {
                return Err(CoreError::catalog(format!(
                    "duplicate widget id `{}`",
                    widget.id
                )));
            }
        }

        Ok(Self { widgets })
    }

    /// Decode and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        if document.version != CATALOG_VERSION {
            return Err(CoreError::catalog(format!(
                "unsupported catalog version {} (expected {CATALOG_VERSION})",
                document.version
            )));
        }
        Self::new(document.widgets)
    }

    /// The catalog compiled into the application, decoded on first use.
    pub fn embedded() -> Result<&'static Catalog> {
        if let Some(catalog) = EMBEDDED.get() {
            return Ok(catalog);
        }

        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        info!(
            widgets = catalog.len(),
            categories = catalog.category_labels().len(),
            "Catalog loaded"
        );
        Ok(EMBEDDED.get_or_init(|| catalog))
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[WidgetRecord] {
        &self.widgets
    }

    /// Record at a catalog index.
    pub fn get(&self, index: usize) -> Option<&WidgetRecord> {
        self.widgets.get(index)
    }

    /// Look a record up by id.
    pub fn find(&self, id: &str) -> Option<&WidgetRecord> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Distinct category labels in order of first appearance.
    pub fn category_labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.widgets
            .iter()
            .map(|w| w.category.as_str())
            .filter(|label| seen.insert(*label))
            .collect()
    }

    /// Category entries for the filter, led by the "all" entry.
    ///
    /// Counts reflect the records matching `search_term`, so an empty term
    /// yields the plain per-category totals.
    pub fn categories(&self, search_term: &str) -> Vec<Category> {
        let matching: Vec<&WidgetRecord> = self
            .widgets
            .iter()
            .filter(|w| matches_search(w, search_term))
            .collect();

        let mut categories = Vec::with_capacity(8);
        categories.push(Category {
            id: ALL_CATEGORIES.to_string(),
            count: matching.len(),
        });
        categories.extend(self.category_labels().into_iter().map(|label| Category {
            id: label.to_string(),
            count: matching.iter().filter(|w| w.category == label).count(),
        }));
        categories
    }
}
