//! Domain module - Core business logic and entities
//!
//! Record normalization, selection state, and the pagination math behind
//! bulk selection. Everything here is pure and synchronous except the
//! page-provider trait in `services`.

pub mod artwork;
pub mod constants;
pub mod pagination;
pub mod selection;
pub mod services;

// Re-export commonly used items
pub use artwork::Artwork;
pub use pagination::PageQueue;
pub use selection::SelectionSet;
