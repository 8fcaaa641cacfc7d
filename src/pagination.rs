//! Navigation state for a page of search results.

use serde::Serialize;

/// Number of articles the news API returns per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Links rendered below a page of results.
///
/// `next_page` is the page to request when following "next". The displayed
/// page trails it by one except on the first page.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationState {
    pub next_page: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub previous_page: usize,
    pub is_last_page: bool,
}

/// Derives the navigation state for `requested_page` out of `total_results`.
///
/// A `page_size` of zero is treated as one; configuration rejects it earlier.
pub fn compute(requested_page: usize, total_results: usize, page_size: usize) -> PaginationState {
    let total_pages = total_results.div_ceil(page_size.max(1));

    let current_page = if requested_page == 1 {
        requested_page
    } else {
        requested_page.saturating_sub(1).max(1)
    };

    let is_last_page = requested_page >= total_pages;
    let next_page = if is_last_page {
        requested_page
    } else {
        requested_page + 1
    };

    PaginationState {
        next_page,
        total_pages,
        current_page,
        previous_page: current_page - 1,
        is_last_page,
    }
}
