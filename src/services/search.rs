//! Services backing the search results page.

use crate::domain::search::SearchQuery;
use crate::dto::search::SearchView;
use crate::forms::search::SearchForm;
use crate::news::NewsClient;
use crate::pagination;
use crate::services::ServiceResult;

/// Validates the query parameters, fetches one page of articles and derives
/// the navigation links for it.
pub async fn search_news<C>(client: &C, form: SearchForm) -> ServiceResult<SearchView>
where
    C: NewsClient + ?Sized,
{
    let query = SearchQuery::try_from(form)?;

    let mut results = client
        .fetch_everything(&query.text, query.page)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch news for {:?}: {err}", query.text);
            err
        })?;
    results.drop_unsafe_links();

    log::debug!(
        "Fetched {} of {} articles for {:?}, page {}",
        results.articles.len(),
        results.total_results,
        query.text,
        query.page
    );

    let pagination = pagination::compute(
        query.page.as_usize(),
        results.total_results,
        client.page_size(),
    );

    Ok(SearchView {
        query: query.text,
        pagination,
        results,
    })
}
