use std::{sync::Arc, time::Duration};

use super::State;

/// Periodic full rebuild of the catalog cache, off the request path.
///
/// The rebuild itself is a join over the whole id range; the new snapshot
/// only replaces the old one once the batch has fully completed, so
/// requests keep serving the stale snapshot in the meantime.
pub fn spawn_refresh_task(state: Arc<State>) {
    let refresh_state = Arc::clone(&state);
    tokio::task::spawn(async move {
        let period = Duration::from_secs(refresh_state.config.pokeapi.refresh_interval_secs);
        loop {
            tokio::time::sleep(period).await;

            tracing::info!("[Catalog] scheduled refresh starting");
            let snapshot = refresh_state.catalog.rebuild().await;
            tracing::info!(
                "[Catalog] scheduled refresh complete: {} entries",
                snapshot.len()
            );
        }
    });
}
