//! Client for the remote news search API.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::article::SearchResults;
use crate::domain::types::PageNumber;

pub mod client;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use client::NewsApiClient;

/// Failures talking to the news API. Callers treat every variant as a failed
/// fetch; the split only helps diagnostics.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("news api responded with {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("failed to decode news api response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid news api endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type NewsResult<T> = Result<T, NewsError>;

/// Read-only handle shared by all request handlers.
#[async_trait]
pub trait NewsClient: Send + Sync {
    /// Number of articles requested per page.
    fn page_size(&self) -> usize;

    /// Searches every article matching `query` and returns the given page.
    async fn fetch_everything(&self, query: &str, page: PageNumber) -> NewsResult<SearchResults>;
}
