//! Page registry - the single place that maps the active page to a view.

pub mod dashboard;
pub mod home;
pub mod info;
pub mod links;

use crate::layout::global_context::AppPage;
use dashboard::DashboardPage;
use home::HomePage;
use info::InfoPage;
use leptos::prelude::*;
use links::LinksPage;

/// Top-level dispatch from the enumerated page state to content. All
/// transitions are unconditional single-step switches, so a plain match
/// is the whole "router".
pub fn render_page(page: AppPage) -> AnyView {
    match page {
        AppPage::Home => view! { <HomePage /> }.into_any(),
        AppPage::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppPage::Info => view! { <InfoPage /> }.into_any(),
        AppPage::Links => view! { <LinksPage /> }.into_any(),
    }
}
