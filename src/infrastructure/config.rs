//! Configuration infrastructure
//!
//! The browsing core takes its settings from the embedding application;
//! there is no file or environment loading. [`AppConfig`] carries the few
//! knobs the HTTP layer needs, with defaults pointing at the public
//! catalog API.

use serde::{Deserialize, Serialize};

use crate::domain::constants::site;

/// Settings injected by the embedding front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: site::BASE_URL.to_string(),
            request_timeout_seconds: 30,
            user_agent: concat!("artic-table/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_api() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://api.artic.edu/api/v1");
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "base_url": "http://localhost:8080" }"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_seconds, 30);
    }
}
