//! Presentation effects applied to the document root.

use tracing::warn;
use widgetdoc_core::{Language, Theme};

/// Class on `<html>` that switches the stylesheet to dark colors.
pub const DARK_CLASS: &str = "dark";

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Toggle the dark class on the document root.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        warn!(error = ?e, "Failed to apply theme");
    }
}

/// Set the `lang` and `dir` attributes on the document root.
pub fn apply_language(language: Language) {
    let Some(root) = document_element() else {
        return;
    };
    for (name, value) in [("lang", language.tag()), ("dir", language.dir())] {
        if let Err(e) = root.set_attribute(name, value) {
            warn!(attribute = name, error = ?e, "Failed to apply language");
        }
    }
}
