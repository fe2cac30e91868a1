//! Selection set and the pure bulk-selection transitions.
//!
//! The transitions here are plain functions over values so every step of
//! the bulk-select flow is testable without a rendering surface or a live
//! endpoint.

use std::collections::HashMap;

use crate::domain::artwork::Artwork;
use crate::domain::pagination::PageQueue;

/// Identifier-keyed collection of currently chosen records, possibly
/// spanning multiple pages. Unordered, deduplicated by id.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: HashMap<i64, Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: i64) -> Option<&Artwork> {
        self.entries.get(&id)
    }

    pub fn insert(&mut self, artwork: Artwork) {
        self.entries.insert(artwork.id, artwork);
    }

    pub fn remove(&mut self, id: i64) -> Option<Artwork> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Per-row checkbox: add the record if absent, remove it if present.
    /// Independent of any pending bulk selection.
    pub fn toggle(&mut self, artwork: &Artwork) {
        if self.entries.remove(&artwork.id).is_none() {
            self.insert(artwork.clone());
        }
    }

    /// Header checkbox on: add every visible record in one batch.
    pub fn select_page(&mut self, records: &[Artwork]) {
        for artwork in records {
            self.insert(artwork.clone());
        }
    }

    /// Header checkbox off: remove exactly the visible ids, leaving
    /// selections made on other pages untouched.
    pub fn unselect_page(&mut self, records: &[Artwork]) {
        for artwork in records {
            self.entries.remove(&artwork.id);
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.keys().copied()
    }

    pub fn artworks(&self) -> impl Iterator<Item = &Artwork> {
        self.entries.values()
    }
}

/// Bulk-select transition: restart the selection from scratch with the
/// first `min(target, len(records))` records of the current page, and
/// queue the subsequent pages needed to cover the rest.
pub fn apply_bulk_select(
    target: usize,
    current_page: u32,
    records: &[Artwork],
) -> (SelectionSet, PageQueue) {
    let mut selection = SelectionSet::new();
    let take = target.min(records.len());
    for artwork in &records[..take] {
        selection.insert(artwork.clone());
    }
    let queue = PageQueue::for_remaining(current_page, target - take);
    (selection, queue)
}

/// Drain-step transition: merge the first unfilled rows of a fetched page
/// into the selection (never resetting it). Returns how many rows were
/// added, `min(target - len(selection), len(fetched))`.
pub fn select_from_page(selection: &mut SelectionSet, target: usize, fetched: &[Artwork]) -> usize {
    let needed = target.saturating_sub(selection.len());
    let take = needed.min(fetched.len());
    for artwork in &fetched[..take] {
        selection.insert(artwork.clone());
    }
    take
}
