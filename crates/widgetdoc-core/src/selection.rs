//! Active record reconciliation.

use crate::model::WidgetRecord;

/// Decide which record stays active after the visible set changed.
///
/// The current id is kept while it is still visible; otherwise the first
/// visible record takes over, or nothing when the set is empty.
pub fn reconcile(active_id: Option<&str>, visible: &[&WidgetRecord]) -> Option<String> {
    match active_id {
        Some(id) if visible.iter().any(|r| r.id == id) => Some(id.to_string()),
        _ => visible.first().map(|r| r.id.clone()),
    }
}
