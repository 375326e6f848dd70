//! Search input for the main widget list.

use leptos::prelude::*;
use widgetdoc_core::{Language, Message, text};

/// Search box with a clear button.
///
/// The term is owned by the caller; every keystroke is forwarded through
/// `on_change` so filtering happens in the same update.
#[component]
pub fn SearchBar(
    /// The current search term.
    #[prop(into)]
    query: Signal<String>,
    /// Called with the new term on every edit.
    on_change: Callback<String>,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    let has_query = move || !query.with(String::is_empty);

    view! {
      <div class="wd-search">
        <span class="wd-search-icon" aria-hidden="true">
          "🔍"
        </span>
        <input
          type="text"
          class="wd-search-input"
          placeholder=move || text(language.get(), Message::SearchPlaceholder)
          prop:value=move || query.get()
          on:input=move |ev| on_change.run(event_target_value(&ev))
        />
        <Show when=has_query>
          <button
            class="wd-search-clear"
            on:click=move |_| on_change.run(String::new())
            aria-label=move || text(language.get(), Message::ClearSearch)
          >
            "×"
          </button>
        </Show>
      </div>
    }
}
