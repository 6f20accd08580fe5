use dex_core::{PokemonDetail, PokemonSummary};

/// Everything the presentation layer renders, published as a snapshot on
/// every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Summaries loaded so far, in request order. Only `restart` shrinks it.
    pub pokemon: Vec<PokemonSummary>,
    /// Offset of the next page to request.
    pub offset: u32,
    /// Last total reported by the server; 0 until the first page lands.
    pub total_count: u32,
    /// A page fetch is in flight.
    pub loading: bool,
    pub search_result: Option<PokemonDetail>,
    /// Detail shown in the dialog.
    pub selected: Option<PokemonDetail>,
    pub error: Option<String>,
}

impl CatalogState {
    /// Every page has been loaded.
    pub fn is_exhausted(&self) -> bool {
        self.total_count > 0 && self.offset >= self.total_count
    }
}
