use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Read-only view of a JSON document with a copy button and a size footer.
#[component]
pub fn JsonViewer(
    /// Pretty-printed JSON to show
    json_content: String,
    /// Heading above the content
    #[prop(optional)]
    title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let json_content_for_copy = json_content.clone();
    let char_count = json_content.chars().count();
    let line_count = json_content.lines().count();

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_content_for_copy.clone();
        leptos::task::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {:?}", err);
                return;
            }
            set_copied.set(true);
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h2 class="json-viewer__title">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h2>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=handle_copy
                >
                    {move || if copied.get() {
                        view! {
                            <>
                                {icon("check")}
                                {"Copied"}
                            </>
                        }.into_any()
                    } else {
                        view! {
                            <>
                                {icon("copy")}
                                {"Copy"}
                            </>
                        }.into_any()
                    }}
                </Button>
            </div>

            <pre class="json-viewer__content">{json_content}</pre>

            <div class="json-viewer__footer">
                {"Size: "}
                <strong>{format!("{} chars", char_count)}</strong>
                {" | "}
                {"Lines: "}
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}
