//! Topic search over a stock-image catalog (Pixabay).
//!
//! One search call per game, restricted to vector images of at least
//! `SEARCH_MIN_WIDTH` x `SEARCH_MIN_HEIGHT`, one page of `SEARCH_PAGE_SIZE`
//! hits. Each hit's tag string becomes the card name.

use async_trait::async_trait;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{get_json, CardSource};
use crate::cards::{CardDefinition, CardId};
use crate::error::{SourceError, SourceResult};

/// Public Pixabay endpoint.
pub const SEARCH_BASE_URL: &str = "https://pixabay.com/api/";

/// Hits requested per search.
pub const SEARCH_PAGE_SIZE: usize = 8;

/// Minimum image width in pixels.
pub const SEARCH_MIN_WIDTH: u32 = 200;

/// Minimum image height in pixels.
pub const SEARCH_MIN_HEIGHT: u32 = 200;

const IMAGE_TYPE: &str = "vector";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    total_hits: u64,
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    tags: String,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
}

impl From<Hit> for CardDefinition {
    fn from(hit: Hit) -> Self {
        CardDefinition::new(CardId::new(hit.id), hit.tags, hit.webformat_url)
    }
}

/// Keyword search; requires a topic.
#[derive(Clone, Debug)]
pub struct ImageSearchCatalog {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: usize,
    min_width: u32,
    min_height: u32,
}

impl ImageSearchCatalog {
    /// Catalog against the public endpoint with the given API key.
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: SEARCH_BASE_URL.to_string(),
            api_key: api_key.into(),
            page_size: SEARCH_PAGE_SIZE,
            min_width: SEARCH_MIN_WIDTH,
            min_height: SEARCH_MIN_HEIGHT,
        }
    }

    /// Point at another endpoint (mirrors, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Hits per search.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Minimum image dimensions.
    #[must_use]
    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    async fn search(&self, topic: &str) -> SourceResult<SearchResponse> {
        debug!(url = %self.base_url, %topic, per_page = self.page_size, "searching image catalog");

        let min_width = self.min_width.to_string();
        let min_height = self.min_height.to_string();
        let per_page = self.page_size.to_string();
        let request = self.client.get(&self.base_url).query(&[
            ("key", self.api_key.as_str()),
            ("q", topic),
            ("image_type", IMAGE_TYPE),
            ("min_width", min_width.as_str()),
            ("min_height", min_height.as_str()),
            ("per_page", per_page.as_str()),
        ]);
        get_json(request).await
    }
}

/// Keep the first hit for each tag string.
fn distinct_by_tags(hits: Vec<Hit>) -> Vec<CardDefinition> {
    let mut seen = FxHashSet::default();
    hits.into_iter()
        .filter(|hit| {
            let fresh = seen.insert(hit.tags.clone());
            if !fresh {
                warn!(tags = %hit.tags, id = hit.id, "dropping hit with repeated tags");
            }
            fresh
        })
        .map(CardDefinition::from)
        .collect()
}

#[async_trait]
impl CardSource for ImageSearchCatalog {
    async fn fetch_cards(&self, topic: Option<&str>) -> SourceResult<Vec<CardDefinition>> {
        let topic = match topic.map(str::trim) {
            Some(topic) if !topic.is_empty() => topic,
            _ => return Err(SourceError::MissingTopic),
        };

        let response = self.search(topic).await?;
        if response.total_hits == 0 || response.hits.is_empty() {
            warn!(%topic, "image search found nothing");
            return Err(SourceError::NoResults {
                topic: topic.to_string(),
            });
        }

        let cards = distinct_by_tags(response.hits);
        debug!(%topic, count = cards.len(), "image search resolved");
        Ok(cards)
    }

    fn uses_topic(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64, tags: &str) -> Hit {
        Hit {
            id,
            tags: tags.to_string(),
            webformat_url: format!("https://img.example/{id}.png"),
        }
    }

    #[test]
    fn test_response_decoding() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "total": 120,
            "totalHits": 100,
            "hits": [
                {
                    "id": 7,
                    "tags": "owl, bird",
                    "webformatURL": "https://img.example/7.png",
                    "likes": 3
                }
            ]
        }))
        .unwrap();

        assert_eq!(response.total_hits, 100);
        let card = CardDefinition::from(response.hits.into_iter().next().unwrap());
        assert_eq!(card.id, CardId::new(7));
        assert_eq!(card.display_name, "owl, bird");
        assert_eq!(card.image_ref, "https://img.example/7.png");
    }

    #[test]
    fn test_empty_response_decoding() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "total": 0,
            "totalHits": 0,
            "hits": []
        }))
        .unwrap();
        assert_eq!(response.total_hits, 0);
        assert!(response.hits.is_empty());
    }

    #[test]
    fn test_distinct_by_tags() {
        let hits = vec![hit(1, "owl"), hit(2, "fox"), hit(3, "owl"), hit(4, "cat")];
        let cards = distinct_by_tags(hits);
        let ids: Vec<_> = cards.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_missing_topic_needs_no_network() {
        let catalog = ImageSearchCatalog::new(reqwest::Client::new(), "key")
            .with_base_url("http://127.0.0.1:9");

        assert!(matches!(catalog.fetch_cards(None).await, Err(SourceError::MissingTopic)));
        assert!(matches!(catalog.fetch_cards(Some("   ")).await, Err(SourceError::MissingTopic)));
        assert!(catalog.uses_topic());
    }
}
