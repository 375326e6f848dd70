//! Search and category filtering over catalog records.
//!
//! Filtering is a linear scan that keeps catalog order. There is no ranking:
//! a record either matches or it does not.

use crate::model::{Language, WidgetRecord};

/// Category selector that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// Whether a record matches a search term.
///
/// The name and English description are compared case-insensitively. The
/// Arabic description is compared literally since the script has no case.
/// An empty term matches everything.
pub fn matches_search(record: &WidgetRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let needle = search_term.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.description.en.to_lowercase().contains(&needle)
        || record.description.ar.contains(search_term)
}

/// Whether a record belongs to the selected category.
///
/// Unknown selectors simply match nothing.
pub fn matches_category(record: &WidgetRecord, category_id: &str) -> bool {
    category_id == ALL_CATEGORIES || record.category == category_id
}

/// Catalog indices of the records matching both predicates, in catalog order.
pub fn filter_indices(
    records: &[WidgetRecord],
    search_term: &str,
    category_id: &str,
    _language: Language,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_category(r, category_id) && matches_search(r, search_term))
        .map(|(i, _)| i)
        .collect()
}

/// Records matching both predicates, in catalog order.
///
/// `language` is accepted for symmetry with the presentation layer; matching
/// always considers both descriptions.
pub fn filter<'a>(
    records: &'a [WidgetRecord],
    search_term: &str,
    category_id: &str,
    language: Language,
) -> Vec<&'a WidgetRecord> {
    filter_indices(records, search_term, category_id, language)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Narrow a list by the sidebar's own search box.
///
/// Unlike [`matches_search`] this only looks at the description in the
/// language currently on screen.
pub fn sidebar_filter<'a>(
    records: &[&'a WidgetRecord],
    search_term: &str,
    language: Language,
) -> Vec<&'a WidgetRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .copied()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.description.get(language).to_lowercase().contains(&needle)
        })
        .collect()
}

/// First `max_chars` characters of `text` followed by an ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{record, sample_catalog};

    fn names(records: &[&WidgetRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_search_all_categories_is_identity() {
        let catalog = sample_catalog();
        for language in [Language::En, Language::Ar] {
            let result = filter(catalog.records(), "", ALL_CATEGORIES, language);
            let expected: Vec<&WidgetRecord> = catalog.records().iter().collect();
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_name_search_case_insensitive() {
        let records = vec![
            record("text", "Text", "Basic Widget", "Shows words", "نص"),
            record("column", "Column", "Layout Widget", "Vertical layout", "عمود"),
        ];

        let result = filter(&records, "col", ALL_CATEGORIES, Language::En);
        assert_eq!(names(&result), vec!["Column"]);

        let result = filter(&records, "COL", ALL_CATEGORIES, Language::En);
        assert_eq!(names(&result), vec!["Column"]);
    }

    #[test]
    fn test_category_only() {
        let records = vec![
            record("text", "Text", "Basic Widget", "Shows words", "نص"),
            record("column", "Column", "Layout Widget", "Vertical layout", "عمود"),
        ];

        let result = filter(&records, "", "Basic Widget", Language::En);
        assert_eq!(names(&result), vec!["Text"]);
    }

    #[test]
    fn test_english_description_matches() {
        let catalog = sample_catalog();
        let result = filter(catalog.records(), "ELEVATES", ALL_CATEGORIES, Language::En);
        assert_eq!(names(&result), vec!["ElevatedButton"]);
    }

    #[test]
    fn test_arabic_description_literal_match() {
        let catalog = sample_catalog();
        let result = filter(catalog.records(), "عموديا", ALL_CATEGORIES, Language::Ar);
        assert_eq!(names(&result), vec!["Column"]);

        // Language does not change what matches.
        let result_en = filter(catalog.records(), "عموديا", ALL_CATEGORIES, Language::En);
        assert_eq!(result, result_en);
    }

    #[test]
    fn test_search_and_category_combine() {
        let catalog = sample_catalog();
        let result = filter(catalog.records(), "arranges", "Layout Widget", Language::En);
        assert_eq!(names(&result), vec!["Column", "Row"]);

        let result = filter(catalog.records(), "arranges", "Basic Widget", Language::En);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = sample_catalog();
        assert!(filter(catalog.records(), "", "Sliver Widget", Language::En).is_empty());
    }

    #[test]
    fn test_every_result_satisfies_predicates() {
        let catalog = sample_catalog();
        let terms = ["a", "ex", "row", "زر", "ing", "widget"];
        let mut categories: Vec<&str> = catalog.category_labels();
        categories.push(ALL_CATEGORIES);

        for term in terms {
            for category in &categories {
                for record in filter(catalog.records(), term, category, Language::En) {
                    assert!(matches_category(record, category));
                    assert!(matches_search(record, term));
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = sample_catalog();
        let first = filter_indices(catalog.records(), "ro", "Layout Widget", Language::En);
        let second = filter_indices(catalog.records(), "ro", "Layout Widget", Language::En);
        assert_eq!(first, second);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let catalog = sample_catalog();
        let indices = filter_indices(catalog.records(), "e", ALL_CATEGORIES, Language::En);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sidebar_filter_uses_current_language() {
        let catalog = sample_catalog();
        let all: Vec<&WidgetRecord> = catalog.records().iter().collect();

        let english = sidebar_filter(&all, "vertically", Language::En);
        assert_eq!(names(&english), vec!["Column"]);

        let arabic = sidebar_filter(&all, "vertically", Language::Ar);
        assert!(arabic.is_empty());

        let by_name = sidebar_filter(&all, "row", Language::Ar);
        assert_eq!(names(&by_name), vec!["Row"]);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("Arranges children", 8), "Arranges...");
        assert_eq!(preview("زر يرتفع", 2), "زر...");
        assert_eq!(preview("short", 40), "short...");
    }
}
