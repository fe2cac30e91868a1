//! artic-table - Paginated artwork catalog browsing core
//!
//! This crate implements the non-rendering core of a data table over the
//! Art Institute of Chicago public catalog: page fetching and record
//! normalization, an identifier-keyed selection set, and bulk selection
//! that spans beyond the currently visible page by queueing and draining
//! additional page fetches one at a time.

// Module declarations
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export commonly used items
pub use application::browser::{CatalogBrowser, RowDensity};
pub use domain::artwork::Artwork;
pub use domain::pagination::PageQueue;
pub use domain::selection::SelectionSet;
pub use domain::services::{ArtworkPage, ArtworkPageProvider};
pub use error::CatalogError;
pub use infrastructure::catalog_api::{CatalogClient, LoadingFlag};
pub use infrastructure::config::AppConfig;
