//! Fixed creature catalog (PokeAPI).
//!
//! One listing call names the creatures; one detail call per creature
//! supplies its id and sprite. Detail calls run concurrently and the result
//! keeps listing order.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{get_json, join_url, CardSource};
use crate::cards::{CardDefinition, CardId};
use crate::error::{SourceError, SourceResult};

/// Public PokeAPI endpoint.
pub const CREATURE_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Creatures per game.
pub const CREATURE_COUNT: usize = 6;

/// Listing response: `GET /pokemon?limit=N`.
#[derive(Debug, Deserialize)]
struct Listing {
    results: Vec<ListingEntry>,
}

#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    url: String,
}

/// Detail response for one creature.
#[derive(Debug, Deserialize)]
struct CreatureDetail {
    id: u64,
    name: String,
    #[serde(default)]
    sprites: Sprites,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

impl CreatureDetail {
    fn into_definition(self) -> SourceResult<CardDefinition> {
        match self.sprites.front_default {
            Some(image) if !image.is_empty() => {
                Ok(CardDefinition::new(CardId::new(self.id), self.name, image))
            }
            _ => Err(SourceError::MissingImage(self.name)),
        }
    }
}

/// Creature cards; ignores the topic.
#[derive(Clone, Debug)]
pub struct CreatureCatalog {
    client: reqwest::Client,
    base_url: String,
    count: usize,
}

impl CreatureCatalog {
    /// Catalog against the public endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: CREATURE_BASE_URL.to_string(),
            count: CREATURE_COUNT,
        }
    }

    /// Point at another endpoint (mirrors, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Number of creatures to list.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    async fn fetch_listing(&self) -> SourceResult<Vec<ListingEntry>> {
        let url = join_url(&self.base_url, "pokemon");
        debug!(%url, limit = self.count, "fetching creature listing");

        let request = self.client.get(&url).query(&[("limit", self.count)]);
        let listing: Listing = get_json(request).await?;
        Ok(listing.results)
    }
}

async fn fetch_detail(client: reqwest::Client, url: String) -> SourceResult<CardDefinition> {
    debug!(%url, "fetching creature detail");
    let detail: CreatureDetail = get_json(client.get(&url)).await?;
    detail.into_definition()
}

#[async_trait]
impl CardSource for CreatureCatalog {
    async fn fetch_cards(&self, _topic: Option<&str>) -> SourceResult<Vec<CardDefinition>> {
        let listing = self.fetch_listing().await?;

        let handles: Vec<_> = listing
            .into_iter()
            .map(|entry| {
                debug!(name = %entry.name, "queueing creature detail");
                tokio::spawn(fetch_detail(self.client.clone(), entry.url))
            })
            .collect();

        let mut cards = Vec::with_capacity(handles.len());
        let mut pending = handles.into_iter();
        while let Some(handle) = pending.next() {
            match handle.await {
                Ok(Ok(card)) => cards.push(card),
                Ok(Err(err)) => {
                    pending.by_ref().for_each(|h| h.abort());
                    return Err(err);
                }
                Err(join_err) => {
                    pending.by_ref().for_each(|h| h.abort());
                    return Err(join_err.into());
                }
            }
        }

        debug!(count = cards.len(), "creature catalog resolved");
        Ok(cards)
    }
}
