//! Mock news client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::article::SearchResults;
use crate::domain::types::PageNumber;
use crate::news::{NewsClient, NewsResult};

mock! {
    pub NewsClient {}

    #[async_trait]
    impl NewsClient for NewsClient {
        fn page_size(&self) -> usize;
        async fn fetch_everything(&self, query: &str, page: PageNumber) -> NewsResult<SearchResults>;
    }
}
