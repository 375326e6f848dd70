//! Category filters: a sidebar for wide screens and chips for narrow ones.

use leptos::prelude::*;
use widgetdoc_core::{Category, Language, Message, text};

/// Category list shown beside the main content.
#[component]
pub fn CategorySidebar(
    /// Categories with their live counts, "all" first.
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    /// Currently selected category id.
    #[prop(into)]
    selected: Signal<String>,
    /// Called with the clicked category id.
    on_select: Callback<String>,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    view! {
      <nav
        class="wd-categories wd-desktop-only"
        aria-label=move || text(language.get(), Message::Categories)
      >
        <h2 class="wd-categories-title">{move || text(language.get(), Message::Categories)}</h2>
        <ul class="wd-categories-list">
          <For
            each=move || categories.get()
            key=|category| (category.id.clone(), category.count)
            children=move |category| {
              let id = category.id.clone();
              let is_selected = Memo::new(move |_| selected.with(|s| *s == id));
              let click_id = category.id.clone();
              let label = StoredValue::new(category.clone());
              view! {
                <li>
                  <button
                    class="wd-category"
                    class:active=is_selected
                    on:click=move |_| on_select.run(click_id.clone())
                  >
                    <span class="wd-category-label">
                      {move || label.with_value(|c| c.label(language.get()).to_string())}
                    </span>
                    <span class="wd-category-count">{category.count}</span>
                  </button>
                </li>
              }
            }
          />

        </ul>
      </nav>
    }
}

/// Category chips shown above the results on small screens.
#[component]
pub fn CategoryChips(
    /// Categories with their live counts, "all" first.
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    /// Currently selected category id.
    #[prop(into)]
    selected: Signal<String>,
    /// Called with the clicked category id.
    on_select: Callback<String>,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    view! {
      <div class="wd-chips wd-mobile-only">
        <h3 class="wd-chips-title">{move || text(language.get(), Message::FilterByCategory)}</h3>
        <div class="wd-chips-list">
          <For
            each=move || categories.get()
            key=|category| (category.id.clone(), category.count)
            children=move |category| {
              let id = category.id.clone();
              let is_selected = Memo::new(move |_| selected.with(|s| *s == id));
              let click_id = category.id.clone();
              let label = StoredValue::new(category.clone());
              view! {
                <button
                  class="wd-chip"
                  class:active=is_selected
                  on:click=move |_| on_select.run(click_id.clone())
                >
                  {move || label.with_value(|c| c.label(language.get()).to_string())}
                  <span class="wd-chip-count">"(" {category.count} ")"</span>
                </button>
              }
            }
          />

        </div>
      </div>
    }
}
