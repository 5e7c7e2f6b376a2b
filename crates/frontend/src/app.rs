use crate::domain::a001_form_schema::ui::editor::SchemaEditor;
use crate::domain::a002_form_submission::ui::form::SchemaForm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config.initial_schema()));

    view! {
        <Shell
            left=|| view! { <SchemaEditor /> }.into_any()
            right=|| view! { <SchemaForm /> }.into_any()
        />
    }
}
