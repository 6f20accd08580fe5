//! Domain DTOs for the PokeAPI.
//!
//! # Design
//! `PokemonPage` and `PokemonSummary` mirror the list endpoint's wire shape
//! and derive `Deserialize` directly. `PokemonDetail` does not: the detail
//! payload is much larger than what the app keeps, so it is produced by
//! `mapper::map_detail` instead of a derived impl.

use serde::{Deserialize, Serialize};

/// Reference to a Pokémon as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
    /// Detail reference, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    pub url: String,
}

/// One batch of the paginated list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonPage {
    /// Total number of Pokémon across all pages.
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<PokemonSummary>,
}

/// A fully resolved Pokémon.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Type names in upstream slot order.
    pub types: Vec<String>,
    /// Front-facing sprite, empty when the upstream has none.
    pub sprite_url: String,
}
