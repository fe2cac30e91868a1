//! HTTP client for catalog fetching
//!
//! Thin wrapper around `reqwest` with the timeout and user agent the
//! embedding application configures. The catalog is queried plainly: no
//! retry, no backoff, no rate limiting.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::CatalogError;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("artic-table/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client shared by all catalog requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self, CatalogError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch raw response from a URL, treating non-2xx statuses as errors.
    pub async fn fetch_response(&self, url: &str) -> Result<Response, CatalogError> {
        debug!("HTTP GET: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("HTTP error {}: {}", status, url);
            return Err(CatalogError::UnexpectedStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Fetch a URL and deserialize its JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let body = self.fetch_response(url).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_with_defaults() {
        let client = HttpClient::with_config(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 5,
            user_agent: "test-agent".to_string(),
        };
        assert!(HttpClient::with_config(config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
        // Nothing listens on the discard port; the connection is refused.
        let result = client.fetch_response("http://127.0.0.1:9/artworks").await;
        assert!(matches!(result, Err(CatalogError::Http(_))));
    }
}
