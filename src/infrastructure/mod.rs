//! Infrastructure layer for HTTP access and external integrations
//!
//! Everything that touches the network or the host environment lives here:
//! the HTTP client wrapper, the catalog API client, configuration, and
//! logging setup.

pub mod catalog_api;
pub mod config;
pub mod http_client;
pub mod logging;

// Re-export commonly used items
pub use catalog_api::{CatalogClient, LoadingFlag};
pub use config::AppConfig;
pub use http_client::{HttpClient, HttpClientConfig};
