//! Artwork catalog API client (the page fetcher).
//!
//! Queries `GET <base>/artworks?page=<n>`, trims the batch to
//! [`FETCH_PAGE_SIZE`] records, and normalizes each into an [`Artwork`].
//! Any network, status, or parse failure is logged and substituted with an
//! empty page; nothing propagates to the caller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, error};
use url::Url;

use crate::domain::artwork::{Artwork, RawArtwork};
use crate::domain::constants::{site, table::FETCH_PAGE_SIZE};
use crate::domain::services::{ArtworkPage, ArtworkPageProvider};
use crate::error::CatalogError;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http_client::{HttpClient, HttpClientConfig};

/// Wire shape of the paginated listing response.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    data: Vec<RawArtwork>,
    pagination: PaginationInfo,
}

#[derive(Debug, Default, Deserialize)]
struct PaginationInfo {
    #[serde(default)]
    total: u64,
}

/// Shared "a fetch is in flight" indicator, observable by the UI layer.
///
/// Set on entry to a fetch and cleared on every exit path, failures
/// included.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn begin(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard(Arc::clone(&self.0))
    }
}

/// Clears the flag when dropped, so early returns cannot leave it stuck.
pub(crate) struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// HTTP-backed page provider over the public artwork catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    base_url: String,
    loading: LoadingFlag,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let http = HttpClient::with_config(HttpClientConfig {
            timeout_seconds: config.request_timeout_seconds,
            user_agent: config.user_agent.clone(),
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            loading: LoadingFlag::new(),
        })
    }

    /// Handle for observing the in-flight indicator.
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    fn listing_url(&self, page: u32) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, site::ARTWORKS_PATH))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    async fn fetch_page_inner(&self, page: u32) -> Result<ArtworkPage, CatalogError> {
        let url = self.listing_url(page)?;
        let listing: ListingResponse = self.http.fetch_json(url.as_str()).await?;

        let artworks: Vec<Artwork> = listing
            .data
            .into_iter()
            .take(FETCH_PAGE_SIZE)
            .map(Artwork::from_raw)
            .collect();

        debug!(
            "Fetched page {}: {} rows (total reported: {})",
            page,
            artworks.len(),
            listing.pagination.total
        );

        Ok(ArtworkPage {
            artworks,
            total: listing.pagination.total,
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl ArtworkPageProvider for CatalogClient {
    async fn fetch_page(&self, page: u32) -> ArtworkPage {
        let _guard = self.loading.begin();
        match self.fetch_page_inner(page).await {
            Ok(fetched) => fetched,
            Err(e) => {
                error!("Error fetching artworks page {}: {}", page, e);
                ArtworkPage::empty()
            }
        }
    }
}
