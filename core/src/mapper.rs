//! Maps a raw `/pokemon/{idOrName}` payload into a `PokemonDetail`.
//!
//! The upstream payload carries dozens of fields (moves, stats, game
//! indices...). Only the handful the app displays are read here; everything
//! else is ignored by serde.

use serde::Deserialize;

use crate::error::ApiError;
use crate::types::PokemonDetail;

#[derive(Deserialize)]
struct RawDetail {
    id: Option<u32>,
    name: Option<String>,
    height: Option<u32>,
    weight: Option<u32>,
    types: Option<Vec<RawTypeSlot>>,
    sprites: Option<RawSprites>,
}

#[derive(Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: RawNamedResource,
}

#[derive(Deserialize)]
struct RawNamedResource {
    name: String,
}

#[derive(Deserialize)]
struct RawSprites {
    front_default: Option<String>,
}

/// Map a detail response body.
///
/// `id`, `name`, `height` and `weight` are required. A missing or null
/// `sprites.front_default` maps to an empty string since not every form has
/// front-facing art.
pub fn map_detail(body: &str) -> Result<PokemonDetail, ApiError> {
    let raw: RawDetail =
        serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    from_raw(raw)
}

/// Same as [`map_detail`] for an already parsed JSON value.
pub fn map_detail_value(value: serde_json::Value) -> Result<PokemonDetail, ApiError> {
    let raw: RawDetail =
        serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    from_raw(raw)
}

fn from_raw(raw: RawDetail) -> Result<PokemonDetail, ApiError> {
    let id = raw.id.ok_or(ApiError::MalformedResponse { field: "id" })?;
    let name = raw.name.ok_or(ApiError::MalformedResponse { field: "name" })?;
    let height = raw.height.ok_or(ApiError::MalformedResponse { field: "height" })?;
    let weight = raw.weight.ok_or(ApiError::MalformedResponse { field: "weight" })?;

    let types = raw
        .types
        .unwrap_or_default()
        .into_iter()
        .map(|slot| slot.kind.name)
        .collect();

    let sprite_url = raw
        .sprites
        .and_then(|s| s.front_default)
        .unwrap_or_default();

    Ok(PokemonDetail {
        id,
        name,
        height,
        weight,
        types,
        sprite_url,
    })
}
