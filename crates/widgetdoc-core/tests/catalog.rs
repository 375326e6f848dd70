//! Tests against the catalog shipped with the application.

use widgetdoc_core::{
    ALL_CATEGORIES, AppConfig, BrowserState, Catalog, Language, MemoryStore, Preferences,
    ViewMode, filter,
};

fn catalog() -> &'static Catalog {
    Catalog::embedded().expect("embedded catalog should decode")
}

fn ids(records: &[&widgetdoc_core::WidgetRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_embedded_catalog_loads() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 35);
    assert_eq!(catalog.records()[0].name, "Text");
    assert_eq!(catalog.records()[0].category, "Basic Widget");
}

#[test]
fn test_every_record_is_complete() {
    for record in catalog().records() {
        assert!(!record.icon.is_empty(), "{} has no icon", record.id);
        assert!(!record.code.is_empty(), "{} has no example", record.id);
        assert!(!record.description.en.is_empty(), "{} lacks en text", record.id);
        assert!(!record.description.ar.is_empty(), "{} lacks ar text", record.id);
        assert!(!record.properties.is_empty(), "{} has no properties", record.id);
        assert_eq!(
            record.tips.en.len(),
            record.tips.ar.len(),
            "{} has unbalanced tips",
            record.id
        );
    }
}

#[test]
fn test_identity_filter() {
    let catalog = catalog();
    let all = filter(catalog.records(), "", ALL_CATEGORIES, Language::Ar);
    assert_eq!(all.len(), catalog.len());
    assert!(all.iter().zip(catalog.records()).all(|(a, b)| a.id == b.id));
}

#[test]
fn test_search_spans_names_and_descriptions() {
    let catalog = catalog();

    let result = filter(catalog.records(), "scroll", ALL_CATEGORIES, Language::En);
    assert_eq!(ids(&result), vec!["listview", "gridview"]);

    let result = filter(catalog.records(), "col", "Layout Widget", Language::En);
    assert_eq!(ids(&result), vec!["column", "expanded"]);

    let result = filter(catalog.records(), "زر", ALL_CATEGORIES, Language::Ar);
    assert_eq!(
        ids(&result),
        vec!["button", "floatingactionbutton", "radio", "dropdownbutton"]
    );
}

#[test]
fn test_category_counts_add_up() {
    let catalog = catalog();
    let categories = catalog.categories("");

    assert_eq!(categories[0].id, ALL_CATEGORIES);
    assert_eq!(categories[0].count, catalog.len());

    let sum: usize = categories.iter().skip(1).map(|c| c.count).sum();
    assert_eq!(sum, catalog.len());

    let basic = categories
        .iter()
        .find(|c| c.id == "Basic Widget")
        .expect("basic category");
    assert_eq!(basic.count, 3);
}

#[test]
fn test_browsing_session() {
    let catalog = catalog();
    let config = AppConfig::embedded().expect("embedded config");
    let store = MemoryStore::new();
    let prefs = Preferences::load(&store, &config.storage, &config.site);

    let mut state = BrowserState::new(catalog, prefs.language, config.site.default_view);
    assert_eq!(state.active_id(), Some("text"));

    assert!(state.select(catalog, "slider"));
    assert_eq!(state.view(), ViewMode::Detail);

    state.set_category(catalog, "Navigation Widget");
    assert_eq!(state.active_id(), Some("appbar"));

    state.set_search(catalog, "drawer");
    assert_eq!(state.active_id(), Some("drawer"));

    state.set_search(catalog, "no widget has this text");
    assert_eq!(state.active_id(), None);
    assert!(state.visible(catalog).is_empty());
}
