use dex_core::DEFAULT_BASE_URL;

/// Number of Pokémon requested per list page.
pub const PAGE_SIZE: u32 = 20;

/// Where the catalog talks to and how much it asks for at a time.
///
/// The default points at the public PokeAPI; tests swap in a local origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
