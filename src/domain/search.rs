use crate::domain::types::PageNumber;

/// Validated search request: free text plus the page to fetch.
///
/// The text may be empty; the news API decides what an empty query means.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub text: String,
    pub page: PageNumber,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, page: PageNumber) -> Self {
        Self {
            text: text.into(),
            page,
        }
    }
}
