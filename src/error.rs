//! Error types for catalog fetching and parsing.
//!
//! Every fallible internal path surfaces a [`CatalogError`]; the
//! silent-degradation policy (substitute an empty page, log, move on)
//! lives in exactly one place, the catalog client's fetch boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} for {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
