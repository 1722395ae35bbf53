//! PokeAPI client
//!
//! This module fetches catalog data from the PokeAPI REST service and decodes
//! it into the typed shapes in [`crate::data`]. Every request goes through
//! the response cache first: a hit skips the network entirely, and only fully
//! decoded successful payloads are ever written back.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};

use super::{LocationArea, LocationPage, Pokemon};
use crate::cache::{CacheError, ResponseCache};

/// Base URL for the PokeAPI REST service
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching catalog data
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body did not match the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A resource name argument was empty
    #[error("{0} name can't be empty")]
    EmptyName(&'static str),

    /// Cache construction was misconfigured
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Client for the PokeAPI catalog with response caching
///
/// Successful, validated response bodies are cached under their full request
/// URL; identical requests inside the cache TTL are served without I/O.
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    page_limit: u32,
    cache: ResponseCache<Value>,
}

impl PokeApiClient {
    /// Creates a client whose cached responses expire after `cache_ttl`
    pub fn new(cache_ttl: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::new(),
            base_url: POKEAPI_BASE_URL.to_string(),
            page_limit: 20,
            cache: ResponseCache::new(cache_ttl)?,
        })
    }

    /// Overrides the base URL, for tests against a local server
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the page size used for location listings
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// URL of the first location-area page
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.base_url, self.page_limit
        )
    }

    /// Fetches one page of location areas
    ///
    /// With no `page_url` this fetches the first page; otherwise `page_url`
    /// must be a `next`/`previous` URL from an earlier page, used verbatim so
    /// it keys the cache identically on every visit.
    pub async fn fetch_locations(&self, page_url: Option<&str>) -> Result<LocationPage, ApiError> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches a single location area by name
    pub async fn fetch_location(&self, name: &str) -> Result<LocationArea, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::EmptyName("location"));
        }
        let url = format!("{}/location-area/{}/", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches a single Pokemon by name
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::EmptyName("pokemon"));
        }
        let url = format!("{}/pokemon/{}/", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Stops the response cache's background activity
    pub async fn close(&self) {
        self.cache.close().await;
    }

    /// Cache-fronted fetch: consult the cache, fall back to the network, and
    /// cache only payloads that decoded to the expected shape
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        if let Some(body) = self.cache.get(url) {
            trace!(%url, "cache hit");
            return Ok(serde_json::from_value(body)?);
        }
        trace!(%url, "cache miss");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body: Value = response.json().await?;
        // Decode before caching: a body that does not match the expected
        // shape must never populate the cache.
        let decoded: T = serde_json::from_value(body.clone())?;
        self.cache.add(url, body);
        debug!(%url, "cached response");

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> PokeApiClient {
        PokeApiClient::new(Duration::from_secs(60)).expect("valid ttl")
    }

    #[tokio::test]
    async fn test_first_page_url_uses_configured_limit() {
        let client = test_client().with_page_limit(5);

        assert_eq!(
            client.first_page_url(),
            "https://pokeapi.co/api/v2/location-area/?offset=0&limit=5"
        );
        client.close().await;
    }

    #[tokio::test]
    async fn test_fetch_location_rejects_empty_name() {
        let client = test_client();

        let result = client.fetch_location("   ").await;

        assert!(matches!(result, Err(ApiError::EmptyName("location"))));
        client.close().await;
    }

    #[tokio::test]
    async fn test_fetch_pokemon_rejects_empty_name() {
        let client = test_client();

        let result = client.fetch_pokemon("").await;

        assert!(matches!(result, Err(ApiError::EmptyName("pokemon"))));
        client.close().await;
    }

    #[tokio::test]
    async fn test_zero_ttl_is_a_configuration_error() {
        let result = PokeApiClient::new(Duration::ZERO);

        assert!(matches!(result, Err(ApiError::Cache(_))));
    }

    #[tokio::test]
    async fn test_cached_page_is_served_without_network() {
        // Seed the cache under the URL the client would request; the fetch
        // must come back from the cache (the base URL points nowhere).
        let client = test_client().with_base_url("http://127.0.0.1:9");
        let url = client.first_page_url();
        let body = serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"name": "pallet-town-area", "url": "http://127.0.0.1:9/location-area/1/"}]
        });
        client.cache.add(url, body);

        let page = client
            .fetch_locations(None)
            .await
            .expect("should be served from cache");

        assert_eq!(page.results[0].name, "pallet-town-area");
        client.close().await;
    }
}
