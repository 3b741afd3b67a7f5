//! Card sources: remote catalogs that supply card definitions.
//!
//! Games pick a source at startup. The two built-in catalogs are:
//!
//! - [`CreatureCatalog`]: a fixed list of creatures; the topic is ignored.
//! - [`ImageSearchCatalog`]: keyword search over a stock-image catalog.
//!
//! Both use one shared `reqwest::Client` built by [`build_client`]. No
//! request is retried and nothing is cached.

mod creature;
mod search;

pub use creature::{CreatureCatalog, CREATURE_BASE_URL, CREATURE_COUNT};
pub use search::{
    ImageSearchCatalog, SEARCH_BASE_URL, SEARCH_MIN_HEIGHT, SEARCH_MIN_WIDTH, SEARCH_PAGE_SIZE,
};

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::cards::CardDefinition;
use crate::error::{SourceError, SourceResult};

/// Default per-request timeout for catalog calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every catalog request.
pub const USER_AGENT: &str = concat!("memory-cards/", env!("CARGO_PKG_VERSION"));

/// A catalog of card definitions.
///
/// ## Implementation Notes
///
/// - Returned definitions must be pairwise distinct by display name.
/// - An empty `Ok` result is allowed; callers treat it as "do not start".
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetch the cards for a game about `topic`.
    async fn fetch_cards(&self, topic: Option<&str>) -> SourceResult<Vec<CardDefinition>>;

    /// Does this source use the topic at all?
    fn uses_topic(&self) -> bool {
        false
    }
}

#[async_trait]
impl<S: CardSource + ?Sized> CardSource for Box<S> {
    async fn fetch_cards(&self, topic: Option<&str>) -> SourceResult<Vec<CardDefinition>> {
        (**self).fetch_cards(topic).await
    }

    fn uses_topic(&self) -> bool {
        (**self).uses_topic()
    }
}

/// Build the HTTP client shared by the catalogs.
pub fn build_client(timeout: Duration) -> SourceResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Send a GET request and decode a JSON body.
///
/// Non-success statuses become [`SourceError::HttpStatus`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> SourceResult<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus(status));
    }
    Ok(response.json::<T>().await?)
}

/// Join a base URL and a path without doubling or dropping the slash.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
