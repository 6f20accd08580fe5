//! Paginated browse + exact search coordinator.
//!
//! # Design
//! The state lives inside a `watch::Sender`, which doubles as the
//! subscription point: every mutation is a short synchronous
//! `send_modify`/`send_if_modified`, so no lock is ever held across a fetch
//! and observers are never waited on.
//!
//! Intents are `async fn`s on `&self`. Overlapping intents of different kinds
//! touch disjoint fields. `load_more` is single-flight: the `loading` flag is
//! checked and set inside one `send_if_modified`, and cleared by a drop guard
//! on every exit path, including a dropped future.
//!
//! Searches carry a generation number. `search` and `clear_search` both bump
//! it, and a search completion is applied only if its generation is still
//! current, so a slow lookup can't resurrect a result the user cleared.

use std::sync::atomic::{AtomicU64, Ordering};

use dex_core::{PokeClient, PokemonSummary};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::repository::PokemonRepository;
use crate::state::CatalogState;
use crate::transport::{ReqwestTransport, Transport};

pub struct Catalog<T> {
    repository: PokemonRepository<T>,
    page_size: u32,
    state: watch::Sender<CatalogState>,
    search_generation: AtomicU64,
}

impl Catalog<ReqwestTransport> {
    /// Catalog against the public PokeAPI.
    pub fn pokeapi() -> Self {
        Self::from_config(&CatalogConfig::default(), ReqwestTransport::new())
    }
}

impl<T: Transport> Catalog<T> {
    pub fn from_config(config: &CatalogConfig, transport: T) -> Self {
        let repository = PokemonRepository::new(PokeClient::new(&config.base_url), transport);
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            repository,
            page_size: config.page_size,
            state,
            search_generation: AtomicU64::new(0),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Drop everything loaded so far and fetch the first page again.
    /// Ignored while a page is loading.
    pub async fn restart(&self) {
        let reset = self.state.send_if_modified(|s| {
            if s.loading {
                return false;
            }
            s.pokemon.clear();
            s.error = None;
            s.offset = 0;
            true
        });
        if !reset {
            debug!("restart ignored, page load in flight");
            return;
        }
        info!("catalog restarted");
        self.load_more().await;
    }

    /// Fetch the page at the current offset and append it.
    ///
    /// No-op while another page is loading or once every page is loaded. A
    /// failure sets `error` and leaves the offset alone, so the next call
    /// retries the same page.
    pub async fn load_more(&self) {
        let mut offset = 0;
        let acquired = self.state.send_if_modified(|s| {
            if s.loading || s.is_exhausted() {
                return false;
            }
            s.loading = true;
            offset = s.offset;
            true
        });
        if !acquired {
            debug!("load_more skipped");
            return;
        }
        let _guard = LoadingGuard { state: &self.state };

        match self.repository.fetch_page(offset, self.page_size).await {
            Ok(page) => {
                debug!(offset, received = page.results.len(), total = page.count, "page loaded");
                let page_size = self.page_size;
                self.state.send_modify(|s| {
                    s.total_count = page.count;
                    s.pokemon.extend(page.results);
                    s.offset = s.offset.saturating_add(page_size);
                    s.loading = false;
                });
            }
            Err(err) => {
                warn!(offset, error = %err, "page load failed");
                self.state.send_modify(|s| {
                    s.error = Some(err.to_string());
                    s.loading = false;
                });
            }
        }
    }

    /// Exact-match search by name or id. The query is trimmed and
    /// lowercased; a blank query clears the current result.
    ///
    /// Failures, including "not found", only clear the result. They never
    /// surface through `error`.
    pub async fn search(&self, query: &str) {
        let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = normalize_query(query);
        if query.is_empty() {
            self.state.send_if_modified(|s| s.search_result.take().is_some());
            return;
        }

        let outcome = self.repository.search_exact(&query).await;
        if let Err(err) = &outcome {
            debug!(%query, error = %err, "search failed");
        }

        let applied = self.state.send_if_modified(|s| {
            if self.search_generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            s.search_result = outcome.ok();
            s.error = None;
            true
        });
        if !applied {
            debug!(%query, "discarding stale search result");
        }
    }

    pub fn clear_search(&self) {
        self.search_generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_if_modified(|s| s.search_result.take().is_some());
    }

    /// Resolve a list entry and show it in the detail dialog.
    pub async fn select_from_list(&self, summary: &PokemonSummary) {
        match self.repository.fetch_detail(&summary.url).await {
            Ok(detail) => self.state.send_modify(|s| s.selected = Some(detail)),
            Err(err) => {
                warn!(name = %summary.name, error = %err, "detail fetch failed");
                self.state.send_modify(|s| s.error = Some(err.to_string()));
            }
        }
    }

    /// Move the current search result into the detail dialog without
    /// fetching it again. Returns `false` when there is no search result.
    pub fn select_from_search_result(&self) -> bool {
        self.state.send_if_modified(|s| match s.search_result.take() {
            Some(detail) => {
                s.selected = Some(detail);
                true
            }
            None => false,
        })
    }

    pub fn dismiss_detail(&self) {
        self.state.send_if_modified(|s| s.selected.take().is_some());
    }
}

/// Clears `loading` if the fetch did not already do so.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<CatalogState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_if_modified(|s| std::mem::replace(&mut s.loading, false));
    }
}

/// `"  PIKACHU "` and `"pikachu"` hit the same remote identifier.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
