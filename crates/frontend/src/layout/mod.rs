pub mod global_context;
pub mod sidebar;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |         Active page          |
/// +-----------+------------------------------+
/// ```
///
/// The center pane is driven by a single dispatch on the enumerated page
/// state; there is no routing layer beyond that.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Sync page state with the URL. Runs once when the shell is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <div class="app-body">
                <div class="app-sidebar">
                    <Sidebar />
                </div>
                <div class="app-main">
                    {move || crate::pages::render_page(ctx.page.get())}
                </div>
            </div>
        </div>
    }
}
