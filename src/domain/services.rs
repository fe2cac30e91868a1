//! Service layer traits for the browsing core.
//!
//! The browser controller only talks to the catalog through
//! [`ArtworkPageProvider`], so the drain loop can be exercised against an
//! in-memory provider in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::artwork::Artwork;

/// One fetched catalog page after trimming and normalization.
#[derive(Debug, Clone)]
pub struct ArtworkPage {
    /// Up to `FETCH_PAGE_SIZE` normalized records, in page order.
    pub artworks: Vec<Artwork>,
    /// Endpoint-reported total item count across all pages.
    pub total: u64,
    /// When this page was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl ArtworkPage {
    /// The degraded result substituted for any fetch or parse failure.
    pub fn empty() -> Self {
        Self {
            artworks: Vec::new(),
            total: 0,
            fetched_at: Utc::now(),
        }
    }
}

/// Supplies trimmed catalog pages to the browser controller.
#[async_trait]
pub trait ArtworkPageProvider: Send + Sync {
    /// Fetch the given 1-based page.
    ///
    /// Implementations do not fail: a network or parse problem degrades to
    /// [`ArtworkPage::empty`] after logging.
    async fn fetch_page(&self, page: u32) -> ArtworkPage;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    #[async_trait]
    impl ArtworkPageProvider for FixedProvider {
        async fn fetch_page(&self, _page: u32) -> ArtworkPage {
            ArtworkPage::empty()
        }
    }

    #[test]
    fn test_empty_page_reports_zero_total() {
        let page = ArtworkPage::empty();
        assert!(page.artworks.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_provider_usable_as_trait_object() {
        let provider: Box<dyn ArtworkPageProvider> = Box::new(FixedProvider);
        let page = tokio_test::block_on(provider.fetch_page(1));
        assert!(page.artworks.is_empty());
    }
}
