//! Async data-access layer over `PokeClient` + `Transport`.
//!
//! Every call is a fresh round trip: no retries, no caching.

use dex_core::{ApiError, PokeClient, PokemonDetail, PokemonPage};
use tracing::debug;

use crate::transport::Transport;

pub struct PokemonRepository<T> {
    client: PokeClient,
    transport: T,
}

impl<T: Transport> PokemonRepository<T> {
    pub fn new(client: PokeClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Fetch `limit` summaries starting at `offset`. The server is trusted to
    /// honor the paging window.
    pub async fn fetch_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, ApiError> {
        debug!(offset, limit, "fetching page");
        let request = self.client.build_list_page(offset, limit);
        let response = self.transport.execute(request).await?;
        self.client.parse_list_page(response)
    }

    /// Resolve a list entry's detail reference (its `url`).
    pub async fn fetch_detail(&self, reference: &str) -> Result<PokemonDetail, ApiError> {
        debug!(reference, "fetching detail");
        let request = self.client.build_get_pokemon_by_reference(reference);
        let response = self.transport.execute(request).await?;
        self.client.parse_pokemon_detail(response)
    }

    /// Exact lookup by name or numeric id. `query` is not normalized; it is
    /// only percent-encoded into the path.
    pub async fn search_exact(&self, query: &str) -> Result<PokemonDetail, ApiError> {
        debug!(query, "exact search");
        let request = self.client.build_get_pokemon(query);
        let response = self.transport.execute(request).await?;
        self.client.parse_pokemon_detail(response)
    }
}
