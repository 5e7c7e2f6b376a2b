use crate::layout::global_context::use_app_context;
use contracts::shared::json_highlight::highlight_json;
use leptos::prelude::*;

#[component]
pub fn SchemaEditor() -> impl IntoView {
    let ctx = use_app_context();

    // The textarea always shows the verbatim text, valid or not.
    let raw_text = move || ctx.store.with(|s| s.raw_text().to_string());
    let highlighted = move || ctx.store.with(|s| highlight_json(s.raw_text()));

    view! {
        <div class="schema-editor">
            <h1 class="panel-title">"JSON Schema Editor"</h1>
            <textarea
                class="schema-editor__input"
                spellcheck="false"
                prop:value=raw_text
                on:input=move |ev| ctx.set_raw_text(event_target_value(&ev))
            />
            <pre class="schema-editor__preview">
                <code inner_html=highlighted></code>
            </pre>
        </div>
    }
}
