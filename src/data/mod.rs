//! Core data models for the Pokedex CLI
//!
//! This module contains the typed shapes of the PokeAPI responses the
//! application consumes, plus the record kept for a caught Pokemon. Required
//! fields are enforced by typed deserialization: a response missing any of
//! them fails to decode and is treated as a malformed payload.

pub mod pokeapi;

pub use pokeapi::{ApiError, PokeApiClient};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A name/URL pair, the unit the API uses to reference another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPage {
    /// Total number of location areas in the catalog
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area with its Pokemon encounters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    /// The parent location this area belongs to
    pub location: NamedResource,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon that can be encountered in a location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    pub version_details: Vec<VersionEncounterDetail>,
}

/// Encounter odds for one game version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedResource,
    pub max_chance: u32,
}

/// A Pokemon as returned by the `/pokemon/{name}` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Base experience yield; the API reports null for some forms
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

/// One base stat of a Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot of a Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A Pokemon the user has caught, with the moment of capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Local>,
}

impl CaughtPokemon {
    /// Records a capture happening now
    pub fn new(pokemon: Pokemon) -> Self {
        Self {
            pokemon,
            caught_at: Local::now(),
        }
    }
}
