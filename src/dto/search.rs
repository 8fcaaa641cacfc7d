use serde::Serialize;

use crate::domain::article::SearchResults;
use crate::pagination::PaginationState;

/// Data required to render a page of search results.
#[derive(Debug, Serialize)]
pub struct SearchView {
    /// Search text echoed back into the search box and navigation links.
    pub query: String,
    pub pagination: PaginationState,
    pub results: SearchResults,
}
