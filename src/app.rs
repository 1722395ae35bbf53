//! Application state for the Pokedex CLI
//!
//! This module contains the shared state threaded through every command:
//! the API client (with its response cache), the user's pokedex of caught
//! Pokemon, and the pagination cursor for the location listing.

use std::collections::HashMap;

use crate::cli::StartupConfig;
use crate::data::{ApiError, CaughtPokemon, PokeApiClient};

/// Mutable state shared by all commands in a session
pub struct App {
    /// PokeAPI client, fronted by the response cache
    pub api: PokeApiClient,
    /// Caught Pokemon keyed by name
    pub pokedex: HashMap<String, CaughtPokemon>,
    /// URL of the next location page, if a page has been fetched
    pub next_url: Option<String>,
    /// URL of the previous location page, if there is one
    pub prev_url: Option<String>,
    /// Flag indicating the input loop should stop
    pub should_quit: bool,
}

impl App {
    /// Creates the session state from the startup configuration
    ///
    /// Starts the response cache's background reaper as a side effect.
    pub fn new(config: &StartupConfig) -> Result<Self, ApiError> {
        let api = PokeApiClient::new(config.cache_ttl)?.with_page_limit(config.page_limit);
        Ok(Self {
            api,
            pokedex: HashMap::new(),
            next_url: None,
            prev_url: None,
            should_quit: false,
        })
    }

    /// Shuts down the response cache
    ///
    /// Safe to call more than once; the REPL's exit path and the end of
    /// `main` both reach this.
    pub async fn close(&self) {
        self.api.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> StartupConfig {
        StartupConfig {
            cache_ttl: Duration::from_secs(60),
            page_limit: 20,
        }
    }

    #[tokio::test]
    async fn test_new_app_starts_empty() {
        let app = App::new(&test_config()).expect("valid config");

        assert!(app.pokedex.is_empty());
        assert!(app.next_url.is_none());
        assert!(app.prev_url.is_none());
        assert!(!app.should_quit);
        app.close().await;
    }

    #[tokio::test]
    async fn test_close_twice_is_safe() {
        let app = App::new(&test_config()).expect("valid config");

        app.close().await;
        app.close().await;
    }
}
