use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the application. The set is fixed, so navigation is an
/// enum instead of a string-keyed tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Accounts,
    Securities,
    Trades,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Accounts, Page::Securities, Page::Trades];

    /// Stable key used in the `?page=` query parameter.
    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Accounts => "accounts",
            Page::Securities => "securities",
            Page::Trades => "trades",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Accounts => "Accounts",
            Page::Securities => "Securities",
            Page::Trades => "Trades",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Page::Dashboard => "bar-chart",
            Page::Accounts => "wallet",
            Page::Securities => "trending-up",
            Page::Trades => "repeat",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_page(&self, page: Page) {
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                this.active.get().key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Rewriting an unchanged URL would still push through the history API
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(Page::from_key("settings"), None);
        assert_eq!(Page::from_key(""), None);
        assert_eq!(Page::from_key("Dashboard"), None);
    }
}
