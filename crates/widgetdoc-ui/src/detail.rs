//! Detail view for the active widget.

use std::time::Duration;

use leptos::prelude::*;
use widgetdoc_core::{Language, Message, WidgetRecord, text};

use crate::code_block::CodeBlock;

/// Full documentation card for one widget.
#[component]
pub fn WidgetDetail(
    /// The widget to document.
    widget: &'static WidgetRecord,
    /// Current display language.
    #[prop(into)]
    language: Signal<Language>,
    /// How long the code block's "copied" state lasts.
    copy_feedback: Duration,
) -> impl IntoView {
    let t = move |message| text(language.get(), message);

    view! {
      <article class="wd-detail">
        <header class="wd-detail-header">
          <span class="wd-detail-icon">{widget.icon.as_str()}</span>
          <div>
            <h1 class="wd-detail-name">{widget.name.as_str()}</h1>
            <span class="wd-badge">{widget.category.as_str()}</span>
            <p class="wd-detail-kind">{move || t(Message::WidgetDocumentation)}</p>
          </div>
        </header>

        <section class="wd-detail-section">
          <h2>{move || t(Message::Description)}</h2>
          <p>{move || widget.description.get(language.get()).as_str()}</p>
        </section>

        <section class="wd-detail-section">
          <h2>{move || t(Message::Properties)}</h2>
          <div class="wd-properties">
            {widget
              .properties
              .iter()
              .map(|property| {
                view! {
                  <div class="wd-property">
                    <div class="wd-property-name">{property.name.as_str()}</div>
                    <code class="wd-property-type">{property.type_label.as_str()}</code>
                    <div class="wd-property-description">
                      {move || property.description.get(language.get()).as_str()}
                    </div>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </section>

        <section class="wd-detail-section">
          <h2>{move || t(Message::ExampleCode)}</h2>
          <CodeBlock code=widget.code.as_str() feedback=copy_feedback language=language />
        </section>

        <section class="wd-detail-section wd-tips">
          <h2>{move || t(Message::UsageTips)}</h2>
          <ul>
            {move || {
              widget
                .tips
                .get(language.get())
                .iter()
                .map(|tip| {
                  view! {
                    <li>
                      <span class="wd-tip-mark">"✓"</span>
                      <span>{tip.as_str()}</span>
                    </li>
                  }
                })
                .collect_view()
            }}
          </ul>
        </section>
      </article>
    }
}
