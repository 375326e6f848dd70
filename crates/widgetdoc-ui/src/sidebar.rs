//! Widget sidebar with its own quick search.

use leptos::prelude::*;
use widgetdoc_core::{
    Language, Message, WidgetRecord,
    filter::{preview, sidebar_filter},
    text,
};

/// List of the visible widgets for quick navigation.
///
/// On narrow screens the sidebar slides in over the content while `open` is
/// set and closes after a selection.
#[component]
pub fn WidgetSidebar(
    /// Visible widgets, in catalog order.
    #[prop(into)]
    widgets: Signal<Vec<&'static WidgetRecord>>,
    /// Id of the active widget.
    #[prop(into)]
    active_id: Signal<Option<String>>,
    /// Whether the sidebar is shown on narrow screens.
    open: RwSignal<bool>,
    /// Description preview length, in characters.
    preview_chars: usize,
    /// Called with the clicked widget id.
    on_select: Callback<String>,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let filtered = Memo::new(move |_| {
        widgets.with(|all| query.with(|q| sidebar_filter(all, q, language.get())))
    });

    view! {
      <Show when=move || open.get()>
        <div class="wd-overlay wd-mobile-only" on:click=move |_| open.set(false)></div>
      </Show>

      <aside class="wd-sidebar" class:open=move || open.get()>
        <div class="wd-sidebar-header">
          <h2>{move || text(language.get(), Message::AllWidgets)}</h2>
          <button class="wd-icon-button wd-mobile-only" on:click=move |_| open.set(false)>
            "×"
          </button>
        </div>

        <div class="wd-sidebar-search">
          <input
            type="text"
            placeholder=move || text(language.get(), Message::SidebarSearchPlaceholder)
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
          />
        </div>

        <ul class="wd-sidebar-list">
          <For
            each=move || filtered.get()
            key=|widget| widget.id.clone()
            children=move |widget: &'static WidgetRecord| {
              let id = widget.id.clone();
              let is_active = Memo::new(move |_| active_id.with(|a| a.as_deref() == Some(id.as_str())));
              let select_id = widget.id.clone();
              view! {
                <li>
                  <button
                    class="wd-sidebar-item"
                    class:active=is_active
                    on:click=move |_| {
                      on_select.run(select_id.clone());
                      open.set(false);
                    }
                  >
                    <span class="wd-sidebar-name">{widget.name.as_str()}</span>
                    <span class="wd-sidebar-preview">
                      {move || preview(widget.description.get(language.get()), preview_chars)}
                    </span>
                    <Show when=move || is_active.get()>
                      <span class="wd-sidebar-marker" aria-hidden="true">
                        "›"
                      </span>
                    </Show>
                  </button>
                </li>
              }
            }
          />

        </ul>
      </aside>
    }
}
