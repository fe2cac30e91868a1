//! Pagination math for bulk selection.
//!
//! Responsibility:
//! - computing which subsequent pages must be fetched to cover a row
//!   deficit, at [`FETCH_PAGE_SIZE`] rows per page
//! - holding those page numbers as an ordered queue drained front to back

use std::collections::VecDeque;

use crate::domain::constants::table::FETCH_PAGE_SIZE;

/// Pending page numbers awaiting fetch for an in-progress bulk selection.
///
/// Created by the bulk-select transition, drained strictly in order, one
/// entry per drain step. Empty is the idle/terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQueue {
    pages: VecDeque<u32>,
}

impl PageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages `current_page + 1, current_page + 2, ...` needed to cover
    /// `remaining` more rows. Zero remaining rows yields an empty queue.
    pub fn for_remaining(current_page: u32, remaining: usize) -> Self {
        let pages_needed = remaining.div_ceil(FETCH_PAGE_SIZE) as u32;
        let pages = (1..=pages_needed).map(|offset| current_page + offset).collect();
        Self { pages }
    }

    /// Next page to fetch, without removing it.
    pub fn peek(&self) -> Option<u32> {
        self.pages.front().copied()
    }

    /// Remove and return the head page number.
    pub fn pop(&mut self) -> Option<u32> {
        self.pages.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().copied()
    }
}

impl FromIterator<u32> for PageQueue {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_zero_remaining_yields_empty_queue() {
        let queue = PageQueue::for_remaining(2, 0);
        assert!(queue.is_empty());
    }

    #[rstest]
    #[case(2, 3, vec![3])] // ceil(3/5) = 1 page
    #[case(2, 5, vec![3])]
    #[case(2, 6, vec![3, 4])]
    #[case(1, 13, vec![2, 3, 4])] // ceil(13/5) = 3 pages
    #[case(7, 1, vec![8])]
    fn test_pages_for_remaining(
        #[case] current_page: u32,
        #[case] remaining: usize,
        #[case] expected: Vec<u32>,
    ) {
        let queue = PageQueue::for_remaining(current_page, remaining);
        assert_eq!(queue.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_drained_front_to_back() {
        let mut queue = PageQueue::for_remaining(1, 11);
        assert_eq!(queue.peek(), Some(2));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
