//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap and validates
//! them into the configuration the application starts with. The cache TTL
//! flag is the single knob the response cache consumes.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The cache TTL must be a positive duration
    #[error("Invalid cache TTL: must be at least 1 second")]
    ZeroCacheTtl,

    /// The page limit must be positive
    #[error("Invalid page limit: must be at least 1")]
    ZeroPageLimit,
}

/// Pokedex CLI - explore the PokeAPI catalog from an interactive prompt
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse locations, explore them, and catch Pokemon from an interactive prompt")]
#[command(version)]
pub struct Cli {
    /// How long cached API responses stay fresh, in seconds
    ///
    /// This is also the sweep interval of the background cleanup, so a stale
    /// entry is dropped at most one interval after it expires.
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub cache_ttl: u64,

    /// Number of location areas per page of the map listing
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    pub page_limit: u32,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Expiry horizon for cached API responses
    pub cache_ttl: Duration,
    /// Page size for location listings
    pub page_limit: u32,
}

impl StartupConfig {
    /// Validates parsed CLI arguments into a startup configuration
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.cache_ttl == 0 {
            return Err(CliError::ZeroCacheTtl);
        }
        if cli.page_limit == 0 {
            return Err(CliError::ZeroPageLimit);
        }
        Ok(StartupConfig {
            cache_ttl: Duration::from_secs(cli.cache_ttl),
            page_limit: cli.page_limit,
        })
    }
}
