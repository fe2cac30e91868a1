//! Catalog site characteristics and table constants.

/// api.artic.edu site characteristics
pub mod site {
    /// Base URL of the public artwork catalog API
    pub const BASE_URL: &str = "https://api.artic.edu/api/v1";

    /// Path of the paginated artworks listing endpoint, relative to [`BASE_URL`]
    pub const ARTWORKS_PATH: &str = "artworks";

    /// Site page numbers use 1-based indexing; the paginator widget emits
    /// 0-based page-change events that must be converted before fetching.
    pub const PAGE_NUMBERING_BASE: u32 = 1;
}

/// Table and selection constants
pub mod table {
    /// Records kept from each fetched page.
    ///
    /// Shared by the fetch trim and the bulk-selection page math; the two
    /// must never diverge.
    pub const FETCH_PAGE_SIZE: usize = 5;

    /// Rows the table widget renders per display page. Larger than
    /// [`FETCH_PAGE_SIZE`] on purpose; the table simply shows short pages.
    pub const TABLE_ROWS_PER_PAGE: usize = 10;

    /// Placeholder shown for text fields the catalog left empty
    pub const MISSING_TEXT_PLACEHOLDER: &str = "N/A";

    /// Word budget for long text fields before truncation
    pub const TEXT_WORD_LIMIT: usize = 8;
}
