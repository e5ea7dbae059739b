use crate::layout::Shell;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the page state store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell />
    }
}
