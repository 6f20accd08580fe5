//! Async browse-and-search layer on top of `dex-core`.
//!
//! # Overview
//! `dex-core` is sans-IO. This crate adds the I/O: a `Transport` that
//! executes the core's requests, a `PokemonRepository` that pairs each
//! `build_*` with its `parse_*`, and the `Catalog` coordinator that owns the
//! paginated list, the search result and the detail dialog state.
//!
//! # Design
//! - State is observed through `tokio::sync::watch`; every intent publishes
//!   a full `CatalogState` snapshot.
//! - The transport is a trait so tests drive the coordinator with scripted
//!   responses and the app uses `ReqwestTransport`.

pub mod catalog;
pub mod config;
pub mod repository;
pub mod scroll;
pub mod state;
pub mod transport;

pub use catalog::{normalize_query, Catalog};
pub use config::{CatalogConfig, PAGE_SIZE};
pub use repository::PokemonRepository;
pub use scroll::EdgeTrigger;
pub use state::CatalogState;
pub use transport::{ReqwestTransport, Transport};
