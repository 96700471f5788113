//! Runtime configuration of the dashboard
//!
//! Built once at startup and provided through context.

use leptos::prelude::*;

/// Browser storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "jwtToken";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Backend origin without trailing slash, e.g. "http://localhost:3000"
    pub api_base_url: String,
    pub token_storage_key: &'static str,
    pub notification_ttl_ms: u32,
    /// Rows in the "recent transactions" table of the overview
    pub recent_transactions_limit: usize,
}

impl DashboardConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            token_storage_key: TOKEN_STORAGE_KEY,
            notification_ttl_ms: 3000,
            recent_transactions_limit: 6,
        }
    }

    /// `DASHBOARD_API_URL` from the build environment, else derived from the page location
    pub fn from_env() -> Self {
        let base = match option_env!("DASHBOARD_API_URL") {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => api_base(),
        };
        Self::with_base_url(&base)
    }
}

/// Backend origin derived from the current window location, using port 3000.
///
/// Returns an empty string outside the browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn provide_config(config: DashboardConfig) {
    provide_context(config);
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().expect("DashboardConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://api.local:3000/ "), "http://api.local:3000");
        assert_eq!(normalize_base_url("https://x.io//"), "https://x.io");
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::with_base_url("http://localhost:3000/");
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.token_storage_key, "jwtToken");
        assert_eq!(config.recent_transactions_limit, 6);
    }
}
