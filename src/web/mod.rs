use std::sync::Arc;
use anyhow::Result;

use crate::catalog::CatalogCache;
use crate::config::Config;
use crate::pokeapi::PokeApiClient;

pub mod background;
pub mod handlers;
pub mod routes;

pub async fn start(config: Arc<Config>) -> Result<()> {
    let state = State::new(Arc::clone(&config)).await;

    // Background tasks
    background::spawn_refresh_task(Arc::clone(&state));

    tracing::info!("listening at {}", config.web.host);
    warp::serve(routes::router(state)).run(config.web.host).await;
    Ok(())
}

pub struct State {
    pub config: Arc<Config>,
    pub catalog: CatalogCache,
}

impl State {
    pub async fn new(config: Arc<Config>) -> Arc<Self> {
        let client = PokeApiClient::new(&config.pokeapi.base_url);
        let catalog = CatalogCache::new(client, config.pokeapi.total_entries);

        let state = Arc::new(Self { config, catalog });

        // Warm the cache before accepting requests so the first real
        // request doesn't pay for the full fan-out.
        let snapshot = state.catalog.get_all().await;
        tracing::info!("[Catalog] warmed up with {} entries", snapshot.len());

        state
    }
}
