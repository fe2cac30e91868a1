//! Catalog browser controller.
//!
//! Single owner of the table's mutable state: the visible page, the
//! selection set, and the page queue behind an in-progress bulk selection.
//! All mutation happens through `&mut self`, synchronously after each
//! awaited fetch, so no locking is involved anywhere.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::artwork::Artwork;
use crate::domain::constants::site::PAGE_NUMBERING_BASE;
use crate::domain::pagination::PageQueue;
use crate::domain::selection::{self, SelectionSet};
use crate::domain::services::ArtworkPageProvider;

/// Row density options offered by the table's density selector.
///
/// Purely cosmetic; stored here only so the front end can render the
/// current choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowDensity {
    Small,
    #[default]
    Normal,
    Large,
}

/// Controller driving the paginated table: one instance per browsing
/// session.
pub struct CatalogBrowser<P: ArtworkPageProvider> {
    provider: P,
    current_page: u32,
    page_records: Vec<Artwork>,
    total: u64,
    selection: SelectionSet,
    pending_pages: PageQueue,
    target_rows: usize,
    density: RowDensity,
}

impl<P: ArtworkPageProvider> CatalogBrowser<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            current_page: PAGE_NUMBERING_BASE,
            page_records: Vec::new(),
            total: 0,
            selection: SelectionSet::new(),
            pending_pages: PageQueue::new(),
            target_rows: 0,
            density: RowDensity::default(),
        }
    }

    /// Fetch and display the given 1-based page.
    pub async fn load_page(&mut self, page: u32) {
        let fetched = self.provider.fetch_page(page).await;
        self.current_page = page;
        self.total = fetched.total;
        self.page_records = fetched.artworks;
    }

    /// Paginator widgets emit 0-based page-change events; convert before
    /// fetching.
    pub async fn goto_page_index(&mut self, page_index: u32) {
        self.load_page(page_index + PAGE_NUMBERING_BASE).await;
    }

    /// Select the first `n` rows starting from the current page, fetching
    /// subsequent pages as needed. Restarts the selection from scratch,
    /// discarding prior manual toggles.
    pub async fn bulk_select(&mut self, n: usize) {
        self.prepare_bulk_select(n);
        self.drain_pending_pages().await;
    }

    /// Apply the bulk-select transition without draining: seed the
    /// selection from the visible page and queue the pages still needed.
    pub fn prepare_bulk_select(&mut self, n: usize) {
        let (selection, queue) = selection::apply_bulk_select(n, self.current_page, &self.page_records);
        info!(
            "Bulk select {} rows from page {}: {} taken locally, {} page(s) queued",
            n,
            self.current_page,
            selection.len(),
            queue.len()
        );
        self.target_rows = n;
        self.selection = selection;
        self.pending_pages = queue;
    }

    /// Process the page queue one entry at a time until it is empty.
    pub async fn drain_pending_pages(&mut self) {
        while self.drain_next_page().await {}
    }

    /// One drain step: fetch the head page, merge its first unfilled rows
    /// into the selection, then pop the head. Returns false once the queue
    /// is empty.
    ///
    /// A failed or empty page contributes zero rows but still advances the
    /// queue, so the loop always terminates.
    pub async fn drain_next_page(&mut self) -> bool {
        let Some(page) = self.pending_pages.peek() else {
            return false;
        };

        let fetched = self.provider.fetch_page(page).await;
        let added = selection::select_from_page(&mut self.selection, self.target_rows, &fetched.artworks);
        if added == 0 {
            warn!("Page {} contributed no rows to the pending selection", page);
        } else {
            debug!(
                "Page {} added {} row(s); selection now holds {} of {}",
                page,
                added,
                self.selection.len(),
                self.target_rows
            );
        }

        self.pending_pages.pop();
        true
    }

    /// Toggle a single visible row on or off. Independent of the bulk
    /// path and of the page queue.
    pub fn toggle_row(&mut self, artwork: &Artwork) {
        self.selection.toggle(artwork);
    }

    /// Header checkbox on: select every record visible on this page.
    pub fn select_all_on_page(&mut self) {
        self.selection.select_page(&self.page_records);
    }

    /// Header checkbox off: unselect exactly this page's records.
    pub fn unselect_all_on_page(&mut self) {
        self.selection.unselect_page(&self.page_records);
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_records(&self) -> &[Artwork] {
        &self.page_records
    }

    /// Endpoint-reported total item count across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn pending_pages(&self) -> &PageQueue {
        &self.pending_pages
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn density(&self) -> RowDensity {
        self.density
    }

    pub fn set_density(&mut self, density: RowDensity) {
        self.density = density;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_density_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RowDensity::Small).unwrap(), "\"small\"");
        assert_eq!(serde_json::to_string(&RowDensity::Normal).unwrap(), "\"normal\"");
        assert_eq!(serde_json::to_string(&RowDensity::Large).unwrap(), "\"large\"");
    }
}
