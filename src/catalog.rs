//! In-memory catalog cache.
//!
//! The whole collection is built in one parallel fan-out over the id range
//! and swapped in as a single snapshot. Readers clone the `Arc` and keep
//! whatever snapshot they started with; a rebuild never exposes a
//! partially built collection.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::RwLock;

use crate::error::CatalogError;
use crate::pokeapi::{mapping, PokeApiClient};
use crate::pokemon::Pokemon;

/// Size of the static stand-in catalog served during a total outage.
const PLACEHOLDER_ENTRIES: u32 = 10;

pub struct CatalogCache {
    client: PokeApiClient,
    total_entries: u32,
    snapshot: RwLock<Option<Arc<[Pokemon]>>>,
}

impl CatalogCache {
    pub fn new(client: PokeApiClient, total_entries: u32) -> Self {
        Self {
            client,
            total_entries,
            snapshot: RwLock::new(None),
        }
    }

    /// The current snapshot, building it first if nothing is cached yet.
    pub async fn get_all(&self) -> Arc<[Pokemon]> {
        {
            let snapshot = self.snapshot.read().await;
            if let Some(catalog) = &*snapshot {
                return Arc::clone(catalog);
            }
        }

        // First access: build while holding the write lock so concurrent
        // callers wait for this build instead of racing their own.
        let mut snapshot = self.snapshot.write().await;
        if let Some(catalog) = &*snapshot {
            return Arc::clone(catalog);
        }

        let catalog = self.build().await;
        *snapshot = Some(Arc::clone(&catalog));
        catalog
    }

    /// Rebuild the catalog and replace the snapshot unconditionally, even
    /// when the rebuild degraded to placeholder data.
    pub async fn rebuild(&self) -> Arc<[Pokemon]> {
        let catalog = self.build().await;
        *self.snapshot.write().await = Some(Arc::clone(&catalog));
        catalog
    }

    /// One page of the catalog; empty once `page * size` runs past the end.
    pub async fn get_page(&self, page: usize, size: usize) -> Vec<Pokemon> {
        let all = self.get_all().await;
        let from = page.saturating_mul(size);
        if from >= all.len() {
            return Vec::new();
        }
        let to = usize::min(from.saturating_add(size), all.len());
        all[from..to].to_vec()
    }

    /// Linear scan of the snapshot; the collection tops out at 150 entries.
    pub async fn get_by_id(&self, id: u32) -> Result<Pokemon, CatalogError> {
        let all = self.get_all().await;
        all.iter()
            .find(|pokemon| pokemon.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Fan out one fetch per id and join them all. Failed ids are logged
    /// and dropped, never retried; a batch with zero survivors degrades to
    /// the placeholder set.
    async fn build(&self) -> Arc<[Pokemon]> {
        let fetches = (1..=self.total_entries).map(|id| self.fetch_entry(id));

        // join_all keeps the input order, so the collection comes out in
        // ascending id order whatever order the fetches complete in.
        let catalog: Vec<Pokemon> = join_all(fetches).await.into_iter().flatten().collect();

        if catalog.is_empty() {
            tracing::warn!(
                "[Catalog] upstream fully unavailable, serving {} placeholder entries",
                PLACEHOLDER_ENTRIES
            );
            return placeholder_catalog().into();
        }

        if (catalog.len() as u32) < self.total_entries {
            // Indistinguishable from upstream genuinely having fewer
            // entries; logged so a degraded upstream shows up somewhere.
            tracing::warn!(
                "[Catalog] built {} of {} entries, failed ids were dropped",
                catalog.len(),
                self.total_entries
            );
        }

        catalog.into()
    }

    async fn fetch_entry(&self, id: u32) -> Option<Pokemon> {
        let payload = match self.client.fetch_raw(id).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("[Catalog] dropping entry {}: {:#}", id, e);
                return None;
            }
        };

        match mapping::parse_entry(&payload, id) {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                tracing::warn!("[Catalog] dropping entry {}: {:#}", id, e);
                None
            }
        }
    }
}

/// Deterministic stand-in catalog for a total upstream outage.
pub fn placeholder_catalog() -> Vec<Pokemon> {
    (1..=PLACEHOLDER_ENTRIES)
        .map(|id| Pokemon {
            id,
            name: format!("Pokemon {}", id),
            types: vec!["normal".to_string()],
            front_image: format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
                id
            ),
            back_image: format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/{}.png",
                id
            ),
            region: "Unknown".to_string(),
            weaknesses: vec!["fighting".to_string()],
        })
        .collect()
}
