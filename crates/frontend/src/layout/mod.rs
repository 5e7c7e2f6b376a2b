pub mod global_context;

use leptos::prelude::*;

/// Two-panel page: schema editor on the left, rendered form on the right.
///
/// ```text
/// +--------------------+--------------------+
/// |  Editor (Left)     |  Form (Right)      |
/// +--------------------+--------------------+
/// ```
#[component]
pub fn Shell<L, R>(left: L, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div data-zone="left" class="app-panel app-panel--left">
                {left()}
            </div>
            <div data-zone="right" class="app-panel app-panel--right">
                {right()}
            </div>
        </div>
    }
}
