use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher of an article as reported by the news API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ArticleSource {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Article as reported by the news API; templates see snake_case names.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    pub author: Option<String>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
}

/// One page of results returned by the news API.
///
/// Only `total_results` drives pagination; the articles reach the templates
/// unchanged apart from [`SearchResults::drop_unsafe_links`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchResults {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: usize,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Article {
    /// Clears links whose scheme is not `http` or `https`.
    pub fn drop_unsafe_links(&mut self) {
        if !is_http_url(&self.url) {
            self.url.clear();
        }
        if !self.url_to_image.as_deref().is_some_and(is_http_url) {
            self.url_to_image = None;
        }
    }
}

impl SearchResults {
    /// Applies [`Article::drop_unsafe_links`] to every article.
    pub fn drop_unsafe_links(&mut self) {
        self.articles
            .iter_mut()
            .for_each(Article::drop_unsafe_links);
    }
}

/// Upstream links end up in `href`/`src`; only web URLs are allowed there.
fn is_http_url(url: &str) -> bool {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme);
    matches!(scheme, Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_news_api_payload() {
        let payload = r#"{
            "status": "ok",
            "totalResults": 45,
            "articles": [{
                "source": {"id": null, "name": "Example Times"},
                "author": null,
                "title": "Rust 2024 lands",
                "description": "Edition release notes",
                "url": "https://example.com/rust",
                "urlToImage": "https://example.com/rust.png",
                "publishedAt": "2024-02-20T09:30:00Z",
                "content": null
            }]
        }"#;

        let results: SearchResults = serde_json::from_str(payload).expect("valid payload");

        assert_eq!(results.total_results, 45);
        assert_eq!(results.articles.len(), 1);
        let article = &results.articles[0];
        assert_eq!(article.source.name, "Example Times");
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("https://example.com/rust.png")
        );
        assert_eq!(
            article.published_at.map(|d| d.to_rfc3339()),
            Some("2024-02-20T09:30:00+00:00".to_string())
        );
    }

    #[test]
    fn serializes_snake_case_for_templates() {
        let results = SearchResults {
            total_results: 3,
            articles: vec![Article {
                url_to_image: Some("https://example.com/a.png".to_string()),
                ..Article::default()
            }],
            ..SearchResults::default()
        };

        let value = serde_json::to_value(&results).expect("serializes");

        assert_eq!(value["total_results"], 3);
        assert_eq!(
            value["articles"][0]["url_to_image"],
            "https://example.com/a.png"
        );
        assert!(value["articles"][0].get("published_at").is_some());
    }

    #[test]
    fn drops_non_web_links() {
        let mut article = Article {
            url: "javascript:alert(document.cookie)".to_string(),
            url_to_image: Some("data:image/svg+xml,<svg/>".to_string()),
            ..Article::default()
        };
        article.drop_unsafe_links();
        assert_eq!(article.url, "");
        assert_eq!(article.url_to_image, None);

        let mut article = Article {
            url: "HTTPS://example.com/story".to_string(),
            url_to_image: Some("http://example.com/story.png".to_string()),
            ..Article::default()
        };
        article.drop_unsafe_links();
        assert_eq!(article.url, "HTTPS://example.com/story");
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("http://example.com/story.png")
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let results: SearchResults = serde_json::from_str(r#"{"status":"ok"}"#).expect("valid");
        assert_eq!(results.total_results, 0);
        assert!(results.articles.is_empty());
    }
}
