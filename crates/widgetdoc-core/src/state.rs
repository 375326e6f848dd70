//! Browser state: search input, category, view mode and the active record.
//!
//! Every mutation that can change the visible set recomputes it and
//! reconciles the active record before returning, so readers never observe an
//! active record that is not on screen.

use tracing::debug;

use crate::{
    catalog::Catalog,
    filter::{ALL_CATEGORIES, filter_indices},
    model::{Language, ViewMode, WidgetRecord},
    selection::reconcile,
};

/// What the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    search: String,
    category: String,
    language: Language,
    view: ViewMode,
    active: Option<String>,
    /// Catalog indices of the visible records.
    visible: Vec<usize>,
}

impl BrowserState {
    /// Start with an empty search over all categories.
    pub fn new(catalog: &Catalog, language: Language, view: ViewMode) -> Self {
        let mut state = Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            language,
            view,
            active: None,
            visible: Vec::new(),
        };
        state.refresh(catalog);
        state
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Catalog indices of the visible records, in catalog order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// The visible records, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a WidgetRecord> {
        self.visible.iter().filter_map(|&i| catalog.get(i)).collect()
    }

    /// The active record, if any record is visible.
    pub fn active<'a>(&self, catalog: &'a Catalog) -> Option<&'a WidgetRecord> {
        self.active.as_deref().and_then(|id| catalog.find(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Update the search term.
    pub fn set_search(&mut self, catalog: &Catalog, term: impl Into<String>) {
        self.search = term.into();
        self.refresh(catalog);
    }

    /// Select a category by id, or [`ALL_CATEGORIES`].
    pub fn set_category(&mut self, catalog: &Catalog, category_id: impl Into<String>) {
        self.category = category_id.into();
        self.refresh(catalog);
    }

    /// Change the display language.
    pub fn set_language(&mut self, catalog: &Catalog, language: Language) {
        self.language = language;
        self.refresh(catalog);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Make a visible record active and show it in detail view.
    ///
    /// Returns `false` and leaves the state untouched when the record is not
    /// visible.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        let visible = self
            .visible
            .iter()
            .any(|&i| catalog.get(i).is_some_and(|r| r.id == id));
        if !visible {
            debug!(id, "Ignoring selection of a record that is not visible");
            return false;
        }
        self.active = Some(id.to_string());
        self.view = ViewMode::Detail;
        true
    }

    /// Leave detail view for the grid.
    pub fn back_to_widgets(&mut self) {
        self.view = ViewMode::Grid;
    }

    fn refresh(&mut self, catalog: &Catalog) {
        self.visible = filter_indices(
            catalog.records(),
            &self.search,
            &self.category,
            self.language,
        );
        let records = self.visible(catalog);
        self.active = reconcile(self.active.as_deref(), &records);
    }
}
