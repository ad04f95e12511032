//! Runtime settings of the dashboard.
//!
//! Defaults can be overridden at build time:
//! - `ADMIN_API_BASE_URL` replaces the API base URL
//! - `ADMIN_CONFIG` holds a JSON object with any subset of the fields below

use leptos::prelude::*;
use serde::Deserialize;

/// Port the API listens on when the base URL is derived from the page.
pub const DEFAULT_API_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub search_debounce_ms: u32,
    pub enquiry_poll_ms: u32,
    pub idle_timeout_ms: u32,
    pub session_check_ms: u32,
    pub toast_ttl_ms: u32,
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            search_debounce_ms: 500,
            enquiry_poll_ms: 3_000,
            idle_timeout_ms: 180_000,
            session_check_ms: 15_000,
            toast_ttl_ms: 3_500,
            max_upload_bytes: 2 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Build the configuration for the running page.
    pub fn load() -> Self {
        let mut config = match option_env!("ADMIN_CONFIG") {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("ignoring invalid ADMIN_CONFIG: {}", e);
                Self::default()
            }),
            None => Self::default(),
        };
        if config.api_base_url.is_empty() {
            config.api_base_url = resolve_base_url(option_env!("ADMIN_API_BASE_URL"), page_origin());
        }
        log::info!("API base URL: {}", config.api_base_url);
        config
    }
}

fn page_origin() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some((protocol, hostname))
}

/// Explicit URL first, then `{protocol}//{host}:8000/api` of the page.
pub fn resolve_base_url(explicit: Option<&str>, origin: Option<(String, String)>) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let (protocol, hostname) =
        origin.unwrap_or_else(|| ("http:".to_string(), "127.0.0.1".to_string()));
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.enquiry_poll_ms, 3_000);
        assert_eq!(config.idle_timeout_ms, 3 * 60 * 1000);
        assert_eq!(config.max_upload_bytes, 2_097_152);
    }

    #[test]
    fn test_partial_json_override() {
        let config = AppConfig::from_json(r#"{"search_debounce_ms": 250}"#).unwrap();
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.toast_ttl_ms, 3_500);
        assert!(AppConfig::from_json(r#"{"search_debounce_ms": "fast"}"#).is_err());
    }

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com/api/"), None),
            "https://api.example.com/api"
        );
        assert_eq!(
            resolve_base_url(Some("  "), Some(("https:".into(), "admin.test".into()))),
            "https://admin.test:8000/api"
        );
        assert_eq!(resolve_base_url(None, None), "http://127.0.0.1:8000/api");
    }
}
