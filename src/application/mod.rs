//! Application layer - the browser controller
//!
//! Coordinates domain transitions with the page provider: loading the
//! visible page, bulk selection, and draining the page queue.

pub mod browser;

// Re-export commonly used items
pub use browser::{CatalogBrowser, RowDensity};
