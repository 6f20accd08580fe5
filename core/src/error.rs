//! Error types for the PokeAPI client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because an exact-match search that
//! misses is an expected outcome, not a server fault. All other non-2xx
//! responses land in `HttpError` with the raw status code and body for
//! debugging. `MalformedResponse` is reserved for detail payloads that parse
//! as JSON but lack a required scalar field.

use thiserror::Error;

/// Errors returned by `PokeClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: no Pokémon matches the identifier.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// A detail payload was missing a required field.
    #[error("malformed response: missing field `{field}`")]
    MalformedResponse { field: &'static str },

    /// The request never produced a response (connection, DNS, TLS...).
    #[error("transport failed: {0}")]
    Transport(String),
}
