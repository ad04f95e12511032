use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// View shown right after login.
pub const HOME_VIEW: &str = "dashboard";

/// Navigable location of the dashboard, mirrored into the query string
/// (`?view=a001_film_poster&page=3`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl LocationState {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn to_query(&self) -> String {
        let qs = serde_qs::to_string(self).unwrap_or_default();
        format!("?{}", qs)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    /// Last page shown per view, so coming back restores it
    pub pages: RwSignal<HashMap<String, u32>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(HOME_VIEW.to_string()),
            pages: RwSignal::new(HashMap::new()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the view and page from the URL once, then keep the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let location = LocationState::parse(&search);
        if let Some(view) = location.view.filter(|v| !v.is_empty()) {
            if let Some(page) = location.page {
                self.set_page(&view, page);
            }
            self.open_view(&view);
        }

        let this = *self;
        Effect::new(move |_| {
            let view = this.active.get();
            let page = this.pages.with(|pages| pages.get(&view).copied());
            let new_url = LocationState {
                view: Some(view),
                page: page.filter(|p| *p > 1),
            }
            .to_query();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

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

    pub fn open_view(&self, key: &str) {
        log::debug!("open view '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    /// Page remembered for `key`, 1 when the view was never paged.
    pub fn page_for(&self, key: &str) -> u32 {
        self.pages
            .with_untracked(|pages| pages.get(key).copied())
            .unwrap_or(1)
    }

    pub fn set_page(&self, key: &str, page: u32) {
        let _ = self.pages.try_update(|pages| {
            pages.insert(key.to_string(), page.max(1));
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_round_trip() {
        let state = LocationState::parse("?view=a001_film_poster&page=3");
        assert_eq!(state.view.as_deref(), Some("a001_film_poster"));
        assert_eq!(state.page, Some(3));
        assert_eq!(state.to_query(), "?view=a001_film_poster&page=3");
    }

    #[test]
    fn test_location_tolerates_garbage() {
        assert_eq!(LocationState::parse(""), LocationState::default());
        assert_eq!(LocationState::parse("?page=abc").page, None);
        let only_view = LocationState {
            view: Some("dashboard".into()),
            page: None,
        };
        assert_eq!(only_view.to_query(), "?view=dashboard");
    }
}
