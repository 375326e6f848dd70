//! Example code display with line numbers and a copy button.

use std::time::Duration;

use leptos::{prelude::*, task::spawn_local};
use tracing::warn;
use wasm_bindgen_futures::JsFuture;
use widgetdoc_core::{Language, Message, text};

/// Split code into numbered lines, numbering from 1.
///
/// Empty lines are kept so the gutter stays aligned with the source.
pub fn numbered_lines(code: &str) -> Vec<(usize, &str)> {
    code.split('\n').enumerate().map(|(i, line)| (i + 1, line)).collect()
}

/// Code block component.
#[component]
pub fn CodeBlock(
    /// Source code to display.
    code: &'static str,
    /// Language label shown in the toolbar.
    #[prop(default = "dart")]
    label: &'static str,
    /// How long the "copied" state lasts.
    feedback: Duration,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(code);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    copied.set(true);
                    set_timeout(move || copied.set(false), feedback);
                }
                Err(e) => warn!(error = ?e, "Clipboard write failed"),
            }
        });
    };

    view! {
      <div class="wd-code">
        <div class="wd-code-toolbar">
          <span class="wd-code-label">{label}</span>
          <button
            class="wd-code-copy"
            on:click=on_copy
            title=move || text(language.get(), Message::CopyCode)
          >
            {move || {
              if copied.get() {
                format!("✓ {}", text(language.get(), Message::Copied))
              } else {
                text(language.get(), Message::CopyCode).to_string()
              }
            }}
          </button>
        </div>
        <pre class="wd-code-body" dir="ltr">
          <code>
            {numbered_lines(code)
              .into_iter()
              .map(|(number, line)| {
                view! {
                  <div class="wd-code-line">
                    <span class="wd-code-number">{number}</span>
                    <span class="wd-code-text">{line}</span>
                  </div>
                }
              })
              .collect_view()}
          </code>
        </pre>
      </div>
    }
}
