//! Synchronous API client core for the PokeAPI catalog.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `PokeClient` is stateless. It holds only `base_url`.
//! - Each remote operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Detail payloads go through `mapper`, which keeps only the displayed
//!   fields and tolerates missing sprites.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod mapper;
pub mod palette;
pub mod types;

pub use client::{identifier_from_reference, PokeClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mapper::{map_detail, map_detail_value};
pub use types::{PokemonDetail, PokemonPage, PokemonSummary};
