use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The four pages of the application. Navigation is an unconditional
/// single-step switch: the current page is simply the last clicked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Home,
    Dashboard,
    Info,
    Links,
}

impl AppPage {
    /// Every page, in sidebar order.
    pub const ALL: [AppPage; 4] = [
        AppPage::Home,
        AppPage::Dashboard,
        AppPage::Info,
        AppPage::Links,
    ];

    /// Stable key used in the URL query string.
    pub fn key(&self) -> &'static str {
        match self {
            AppPage::Home => "home",
            AppPage::Dashboard => "dashboard",
            AppPage::Info => "info",
            AppPage::Links => "links",
        }
    }

    pub fn from_key(key: &str) -> Option<AppPage> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Sidebar label, emoji included.
    pub fn menu_label(&self) -> &'static str {
        match self {
            AppPage::Home => "🏠 Home",
            AppPage::Dashboard => "📊 Dashboard",
            AppPage::Info => "ℹ️ Info",
            AppPage::Links => "🔗 Links",
        }
    }

    /// Suffix for the browser window title.
    pub fn document_title(&self) -> &'static str {
        match self {
            AppPage::Home => "Home",
            AppPage::Dashboard => "Dashboard",
            AppPage::Info => "Info",
            AppPage::Links => "Links",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(AppPage::default()),
        }
    }

    pub fn set_page(&self, page: AppPage) {
        self.page.set(page);
    }

    /// Restore `?page=` on startup and mirror later page changes back into
    /// the URL, so the active page survives a reload.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| AppPage::from_key(k)) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();

            let Some(w) = window() else {
                return;
            };

            if let Some(document) = w.document() {
                document.set_title(&format!(
                    "ETL & Analytics Dashboard — {}",
                    page.document_title()
                ));
            }

            let new_url = format!("?page={}", page.key());
            let current_search = w.location().search().ok().unwrap_or_default();

            // Only touch history when the URL actually changed
            if current_search != new_url {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_round_trip() {
        for page in AppPage::ALL {
            assert_eq!(AppPage::from_key(page.key()), Some(page));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(AppPage::from_key("settings"), None);
        assert_eq!(AppPage::from_key(""), None);
    }
}
