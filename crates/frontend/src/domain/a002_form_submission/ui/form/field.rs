use crate::layout::global_context::use_app_context;
use contracts::domain::a001_form_schema::{FieldSpec, FieldWidget};
use leptos::prelude::*;

const REQUIRED_MESSAGE: &str = "This field is required";

fn control_class(base: &'static str, has_error: bool) -> String {
    if has_error {
        format!("{base} {base}--error")
    } else {
        base.to_string()
    }
}

/// One field block. Unrecognized kinds and fields without an id show their
/// label and nothing else.
#[component]
pub fn FieldControl(field: FieldSpec) -> impl IntoView {
    let ctx = use_app_context();
    let rendered = field.is_rendered();
    let dom_id = format!("field-{}", field.id);

    let has_error = {
        let id = field.id.clone();
        move || rendered && ctx.session.with(|s| s.has_error(&id))
    };
    let value = {
        let id = field.id.clone();
        move || ctx.session.with(|s| s.values().value_of(&id).to_string())
    };
    let on_input = {
        let id = field.id.clone();
        move |ev: leptos::ev::Event| ctx.set_value(&id, event_target_value(&ev))
    };

    let widget = match field.widget() {
        Some(FieldWidget::Input(kind)) => {
            let has_error = has_error.clone();
            view! {
                <input
                    type=kind.as_str()
                    id=dom_id.clone()
                    class=move || control_class("form-input", has_error())
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
        Some(FieldWidget::TextArea) => {
            let has_error = has_error.clone();
            view! {
                <textarea
                    id=dom_id.clone()
                    class=move || control_class("form-input", has_error())
                    rows="4"
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
        None => view! {}.into_any(),
    };

    view! {
        <div class="form-group">
            <label class="form-label" for=dom_id>{field.label}</label>
            {widget}
            {move || has_error().then(|| view! { <p class="field-error">{REQUIRED_MESSAGE}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class() {
        assert_eq!(control_class("form-input", false), "form-input");
        assert_eq!(control_class("form-input", true), "form-input form-input--error");
    }
}
