//! Stateless HTTP request builder and response parser for the PokeAPI.
//!
//! # Design
//! `PokeClient` holds only a `base_url` and carries no mutable state between
//! calls. Each remote operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::mapper;
use crate::types::{PokemonDetail, PokemonPage};

/// Fixed origin of the public PokeAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Bytes escaped in a path segment: everything except RFC 3986 unreserved.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Synchronous, stateless client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeClient {
    base_url: String,
}

impl Default for PokeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PokeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_page(&self, offset: u32, limit: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/pokemon?offset={offset}&limit={limit}", self.base_url),
            headers: Vec::new(),
        }
    }

    /// Build a detail lookup. `id_or_name` becomes a single percent-encoded
    /// path segment, so `?`, `#` and `/` cannot reshape the URL.
    /// Case and whitespace normalization is the caller's job.
    pub fn build_get_pokemon(&self, id_or_name: &str) -> HttpRequest {
        let segment = utf8_percent_encode(id_or_name, PATH_SEGMENT);
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/pokemon/{segment}", self.base_url),
            headers: Vec::new(),
        }
    }

    /// Build a detail lookup from a list entry's `url`.
    pub fn build_get_pokemon_by_reference(&self, reference: &str) -> HttpRequest {
        self.build_get_pokemon(identifier_from_reference(reference))
    }

    pub fn parse_list_page(&self, response: HttpResponse) -> Result<PokemonPage, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_pokemon_detail(&self, response: HttpResponse) -> Result<PokemonDetail, ApiError> {
        check_status(&response, 200)?;
        mapper::map_detail(&response.body)
    }
}

/// Last path segment of a detail reference, ignoring trailing slashes.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `25`. A reference with no
/// separator is returned as-is.
pub fn identifier_from_reference(reference: &str) -> &str {
    let trimmed = reference.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, last)) => last,
        None => trimmed,
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
