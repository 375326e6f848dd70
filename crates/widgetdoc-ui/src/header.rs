//! Page header with the theme, language and sidebar toggles.

use leptos::prelude::*;
use widgetdoc_core::{Language, Message, Theme, text};

/// Site header.
#[component]
pub fn Header(
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
    /// Current theme.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Flip between light and dark.
    on_toggle_theme: Callback<()>,
    /// Flip between English and Arabic.
    on_toggle_language: Callback<()>,
    /// Open or close the widget sidebar on small screens.
    on_toggle_sidebar: Callback<()>,
) -> impl IntoView {
    view! {
      <header class="wd-header">
        <div class="wd-header-brand">
          <button
            class="wd-icon-button wd-mobile-only"
            on:click=move |_| on_toggle_sidebar.run(())
            aria-label=move || text(language.get(), Message::ToggleSidebar)
          >
            "☰"
          </button>
          <div>
            <h1 class="wd-header-title">{move || text(language.get(), Message::Title)}</h1>
            <p class="wd-header-subtitle">{move || text(language.get(), Message::Subtitle)}</p>
          </div>
        </div>

        <div class="wd-header-actions">
          <button
            class="wd-icon-button"
            on:click=move |_| on_toggle_language.run(())
            title=move || text(language.get(), Message::SwitchLanguage)
          >
            "🌐"
          </button>
          <button
            class="wd-icon-button"
            on:click=move |_| on_toggle_theme.run(())
            title=move || text(language.get(), Message::ToggleTheme)
          >
            {move || if theme.get().is_dark() { "☀️" } else { "🌙" }}
          </button>
        </div>
      </header>
    }
}
