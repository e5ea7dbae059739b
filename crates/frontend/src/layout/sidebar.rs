use crate::layout::global_context::{AppGlobalContext, AppPage};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__title">"Navigation"</div>
            {AppPage::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.page.get() == page
                            on:click=move |_| ctx.set_page(page)
                        >
                            {page.menu_label()}
                        </button>
                    }
                })
                .collect_view()}
            <hr class="app-sidebar__divider" />
            <div class="app-sidebar__caption">
                <p>"Big Data final project"</p>
                <p>"Olist e-commerce warehouse + Brazil inflation"</p>
            </div>
        </div>
    }
}
