//! Grid and list views of the visible widgets.

use leptos::prelude::*;
use widgetdoc_core::{
    Language, Message, ViewMode, WidgetRecord,
    i18n::{property_count, text},
};

/// Container class for a card layout.
pub fn layout_class(layout: ViewMode) -> &'static str {
    match layout {
        ViewMode::List => "wd-cards wd-cards-list",
        ViewMode::Grid | ViewMode::Detail => "wd-cards wd-cards-grid",
    }
}

/// Clickable summary cards for the visible widgets.
#[component]
pub fn WidgetCards(
    /// Visible widgets, in catalog order.
    #[prop(into)]
    widgets: Signal<Vec<&'static WidgetRecord>>,
    /// Id of the active widget, highlighted.
    #[prop(into)]
    active_id: Signal<Option<String>>,
    /// Grid or list.
    layout: ViewMode,
    /// Called with the clicked widget id.
    on_select: Callback<String>,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    let is_list = layout == ViewMode::List;

    view! {
      <div class=layout_class(layout)>
        <For
          each=move || widgets.get()
          key=|widget| widget.id.clone()
          children=move |widget: &'static WidgetRecord| {
            let id = widget.id.clone();
            let is_active = Memo::new(move |_| active_id.with(|a| a.as_deref() == Some(id.as_str())));
            let select_id = widget.id.clone();
            let properties = widget.properties.len();

            view! {
              <article
                class="wd-card"
                class:active=is_active
                on:click=move |_| on_select.run(select_id.clone())
              >
                <div class="wd-card-header">
                  <span class="wd-card-icon">{widget.icon.as_str()}</span>
                  <div class="wd-card-heading">
                    <h3 class="wd-card-name">{widget.name.as_str()}</h3>
                    <div class="wd-card-category">{widget.category.as_str()}</div>
                  </div>
                </div>
                <p class="wd-card-description" class:clamped=!is_list>
                  {move || widget.description.get(language.get()).as_str()}
                </p>
                <div class="wd-card-footer">
                  <span class="wd-badge">{move || property_count(language.get(), properties)}</span>
                  <Show when=move || is_list>
                    <span class="wd-card-hint">
                      {move || text(language.get(), Message::ClickForDetails)}
                    </span>
                  </Show>
                </div>
              </article>
            }
          }
        />

      </div>
    }
}

/// Placeholder shown when nothing matches.
#[component]
pub fn EmptyState(
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    view! {
      <div class="wd-empty">
        <div class="wd-empty-icon">"🔍"</div>
        <p class="wd-empty-title">{move || text(language.get(), Message::NoResults)}</p>
        <p class="wd-empty-hint">{move || text(language.get(), Message::NoResultsHint)}</p>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_class() {
        assert_eq!(layout_class(ViewMode::Grid), "wd-cards wd-cards-grid");
        assert_eq!(layout_class(ViewMode::List), "wd-cards wd-cards-list");
    }
}
