use super::field::FieldControl;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::json_viewer::JsonViewer;
use leptos::prelude::*;

#[component]
pub fn SchemaForm() -> impl IntoView {
    let ctx = use_app_context();
    let schema = ctx.schema_memo();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    // Not keyed by id: ids may repeat and every copy renders.
    let fields = move || {
        schema.with(|s| {
            s.derive_fields()
                .iter()
                .cloned()
                .map(|field| view! { <FieldControl field=field /> })
                .collect_view()
        })
    };

    let submitted = move || {
        ctx.session
            .with(|s| s.submitted().map(|record| record.to_pretty_json()))
            .map(|json| {
                view! {
                    <div class="submitted-data">
                        <JsonViewer json_content=json title="Submitted Data".to_string() />
                    </div>
                }
            })
    };

    view! {
        <div class="schema-form-panel">
            <h1 class="panel-title">{move || schema.with(|s| s.form_title.clone())}</h1>
            <p class="form-description">{move || schema.with(|s| s.form_description.clone())}</p>

            // novalidate: presence is the only rule, the browser must not
            // block submission on email format.
            <form class="schema-form" novalidate=true on:submit=on_submit>
                {fields}
                <button type="submit" class="btn btn-primary">
                    {icon("send")}
                    {"Submit"}
                </button>
            </form>

            {submitted}
        </div>
    }
}
