use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::Deserialize;

use crate::domain::article::SearchResults;
use crate::domain::types::PageNumber;
use crate::models::config::ServerConfig;
use crate::news::{NewsClient, NewsError, NewsResult};

const API_KEY_HEADER: &str = "X-Api-Key";

/// Error payload returned by the news API alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// [`NewsClient`] backed by the NewsAPI `everything` endpoint.
#[derive(Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    page_size: usize,
}

impl NewsApiClient {
    pub fn new(
        client: reqwest::Client,
        endpoint: Url,
        api_key: impl Into<String>,
        page_size: usize,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key: api_key.into(),
            page_size,
        }
    }

    /// Builds a client with its own connection pool and request timeout.
    pub fn from_config(config: &ServerConfig) -> NewsResult<Self> {
        let endpoint = Url::parse(&config.news_api_url)
            .map_err(|e| NewsError::InvalidEndpoint(format!("{}: {e}", config.news_api_url)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::new(
            client,
            endpoint,
            config.news_api_key.clone(),
            config.page_size,
        ))
    }

    fn request(&self, query: &str, page: PageNumber) -> RequestBuilder {
        let page_size = self.page_size.to_string();
        let page = page.to_string();

        self.client
            .get(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("q", query),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ])
    }
}

#[async_trait]
impl NewsClient for NewsApiClient {
    fn page_size(&self) -> usize {
        self.page_size
    }

    async fn fetch_everything(&self, query: &str, page: PageNumber) -> NewsResult<SearchResults> {
        let response = self.request(query, page).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Extracts the most useful message from an unsuccessful response.
fn api_error(status: StatusCode, body: &str) -> NewsError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            code: Some(code),
            message: Some(message),
        }) => format!("{code}: {message}"),
        Ok(ApiErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    NewsError::Api { status, message }
}
