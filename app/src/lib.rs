use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use tracing::error;
use widgetdoc_core::{
    AppConfig, BrowserState, Catalog, Message, Preferences, ViewMode, WidgetRecord,
    i18n::showing_count, text,
};
use widgetdoc_ui::{
    CategoryChips, CategorySidebar, EmptyState, Header, LocalStorageStore, SearchBar,
    WidgetCards, WidgetDetail, WidgetSidebar, apply_language, apply_theme,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let loaded = Catalog::embedded().and_then(|catalog| Ok((catalog, AppConfig::embedded()?)));

    match loaded {
        Ok((catalog, config)) => view! { <Browser catalog=catalog config=config /> }.into_any(),
        Err(e) => {
            error!(error = %e, "Failed to start");
            view! { <StartupError message=e.to_string() /> }.into_any()
        }
    }
}

/// Shown instead of the browser when the catalog or configuration is broken.
#[component]
fn StartupError(message: String) -> impl IntoView {
    let language = Preferences::load(
        &LocalStorageStore,
        &Default::default(),
        &Default::default(),
    )
    .language;

    view! {
      <div class="wd-fatal">
        <h1>{text(language, Message::CatalogUnavailable)}</h1>
        <pre dir="ltr">{message}</pre>
      </div>
    }
}

/// The documentation browser.
#[component]
fn Browser(catalog: &'static Catalog, config: AppConfig) -> impl IntoView {
    let initial = Preferences::load(&LocalStorageStore, &config.storage, &config.site);
    apply_theme(initial.theme);
    apply_language(initial.language);

    let prefs = RwSignal::new(initial);
    let state = RwSignal::new(BrowserState::new(
        catalog,
        initial.language,
        config.site.default_view,
    ));
    let sidebar_open = RwSignal::new(false);
    let keys = StoredValue::new(config.storage.clone());
    let copy_feedback = Duration::from_millis(config.ui.copy_feedback_ms);
    let preview_chars = config.ui.preview_chars;

    let language = Memo::new(move |_| prefs.with(|p| p.language));
    let theme = Memo::new(move |_| prefs.with(|p| p.theme));
    let search = Memo::new(move |_| state.with(|s| s.search().to_string()));
    let category = Memo::new(move |_| state.with(|s| s.category().to_string()));
    let view_mode = Memo::new(move |_| state.with(BrowserState::view));
    let visible = Memo::new(move |_| state.with(|s| s.visible(catalog)));
    let no_results = Memo::new(move |_| visible.with(Vec::is_empty));
    let active_id = Memo::new(move |_| state.with(|s| s.active_id().map(str::to_string)));
    let active: Memo<Option<&'static WidgetRecord>> =
        Memo::new(move |_| state.with(|s| s.active(catalog)));
    let categories = Memo::new(move |_| search.with(|term| catalog.categories(term)));

    let on_toggle_theme = Callback::new(move |_: ()| {
        let theme = keys.with_value(|keys| {
            prefs.try_update(|p| p.toggle_theme(&LocalStorageStore, keys))
        });
        if let Some(theme) = theme {
            apply_theme(theme);
        }
    });

    let on_toggle_language = Callback::new(move |_: ()| {
        let language = keys.with_value(|keys| {
            prefs.try_update(|p| p.toggle_language(&LocalStorageStore, keys))
        });
        if let Some(language) = language {
            apply_language(language);
            state.update(|s| s.set_language(catalog, language));
        }
    });

    let on_toggle_sidebar = Callback::new(move |_: ()| sidebar_open.update(|open| *open = !*open));
    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search(catalog, term)));
    let on_category = Callback::new(move |id: String| state.update(|s| s.set_category(catalog, id)));
    let on_select = Callback::new(move |id: String| {
        state.update(|s| {
            s.select(catalog, &id);
        })
    });

    let t = move |message| text(language.get(), message);

    let view_button = move |mode: ViewMode, message: Message| {
        view! {
          <button
            class="wd-button"
            class:active=move || view_mode.get() == mode
            on:click=move |_| state.update(|s| s.set_view(mode))
          >
            {move || t(message)}
          </button>
        }
    };

    let content = move || {
        if no_results.get() {
            return view! { <EmptyState language=language /> }.into_any();
        }
        match view_mode.get() {
            ViewMode::Detail => match active.get() {
                Some(widget) => view! {
                  <WidgetDetail widget=widget language=language copy_feedback=copy_feedback />
                }
                .into_any(),
                None => view! { <EmptyState language=language /> }.into_any(),
            },
            layout => view! {
              <WidgetCards
                widgets=visible
                active_id=active_id
                layout=layout
                on_select=on_select
                language=language
              />
            }
            .into_any(),
        }
    };

    view! {
      // sets the document title
      <Title text=move || t(Message::Title) />

      <div class="wd-app">
        <Header
          language=language
          theme=theme
          on_toggle_theme=on_toggle_theme
          on_toggle_language=on_toggle_language
          on_toggle_sidebar=on_toggle_sidebar
        />

        <div class="wd-body">
          <CategorySidebar
            categories=categories
            selected=category
            on_select=on_category
            language=language
          />

          <main class="wd-main">
            <SearchBar query=search on_change=on_search language=language />
            <CategoryChips
              categories=categories
              selected=category
              on_select=on_category
              language=language
            />

            <div class="wd-toolbar">
              <span class="wd-counter">
                {move || showing_count(language.get(), visible.with(Vec::len), catalog.len())}
              </span>
              <div class="wd-view-buttons">
                <Show
                  when=move || view_mode.get() == ViewMode::Detail
                  fallback=move || {
                    view! {
                      {view_button(ViewMode::Grid, Message::Grid)}
                      {view_button(ViewMode::List, Message::List)}
                    }
                  }
                >
                  <button
                    class="wd-button active"
                    on:click=move |_| state.update(BrowserState::back_to_widgets)
                  >
                    {move || t(Message::BackToWidgets)}
                  </button>
                </Show>
              </div>
            </div>

            {content}
          </main>

          <WidgetSidebar
            widgets=visible
            active_id=active_id
            open=sidebar_open
            preview_chars=preview_chars
            on_select=on_select
            language=language
          />
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use widgetdoc_core::{Language, MemoryStore, Theme};

    use super::*;

    // The browser component wires these calls to DOM events; the sequence
    // itself is plain Rust and runs natively.
    #[test]
    fn test_toggle_sequence_matches_ui_wiring() {
        let catalog = Catalog::embedded().expect("catalog");
        let config = AppConfig::embedded().expect("config");
        let store = MemoryStore::new();

        let mut prefs = Preferences::load(&store, &config.storage, &config.site);
        let mut state = BrowserState::new(catalog, prefs.language, config.site.default_view);

        let language = prefs.toggle_language(&store, &config.storage);
        state.set_language(catalog, language);
        assert_eq!(state.language(), Language::Ar);

        prefs.toggle_theme(&store, &config.storage);
        let reloaded = Preferences::load(&store, &config.storage, &config.site);
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.language, Language::Ar);
    }
}
