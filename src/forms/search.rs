use serde::Deserialize;
use validator::Validate;

use crate::domain::search::SearchQuery;
use crate::domain::types::PageNumber;
use crate::forms::FormError;

/// Longest query the news API accepts.
pub const MAX_QUERY_LENGTH: u64 = 500;

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw `/search` query string parameters.
pub struct SearchForm {
    /// Search text, empty when omitted.
    #[validate(length(max = MAX_QUERY_LENGTH))]
    pub q: Option<String>,
    /// Decimal page number; absent or empty means the first page.
    pub page: Option<String>,
}

impl TryFrom<SearchForm> for SearchQuery {
    type Error = FormError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let page = match form.page.as_deref() {
            None | Some("") => PageNumber::FIRST,
            Some(raw) => raw.parse::<PageNumber>()?,
        };

        Ok(SearchQuery::new(form.q.unwrap_or_default(), page))
    }
}
