//! Behavior tests for the catalog cache against a stubbed upstream.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use warp::{Filter, Reply};

use crate::catalog::CatalogCache;
use crate::error::CatalogError;
use crate::pokeapi::PokeApiClient;

fn stub_document(id: u32) -> serde_json::Value {
    serde_json::json!({
        "name": format!("creature-{}", id),
        "sprites": {
            "front_default": format!("https://img.invalid/{}/front.png", id),
            "back_default": format!("https://img.invalid/{}/back.png", id),
        },
        "types": [
            { "type": { "name": "grass" } },
            { "type": { "name": "psychic" } },
        ],
    })
}

/// Serve canned PokeAPI documents on an ephemeral port. Ids listed in
/// `broken` answer 500 instead. Dropping the returned sender shuts the
/// stub down, so hold it for the duration of the test.
fn spawn_stub_upstream(broken: &'static [u32]) -> (SocketAddr, oneshot::Sender<()>) {
    let route = warp::path("pokemon")
        .and(warp::path::param::<u32>())
        .and(warp::path::end())
        .map(move |id: u32| {
            if broken.contains(&id) {
                warp::reply::with_status(
                    "stub upstream error".to_string(),
                    warp::http::StatusCode::INTERNAL_SERVER_ERROR,
                )
                .into_response()
            } else {
                warp::reply::json(&stub_document(id)).into_response()
            }
        });

    let (tx, rx) = oneshot::channel::<()>();
    let (addr, server) = warp::serve(route).bind_with_graceful_shutdown(
        ([127, 0, 0, 1], 0),
        async move {
            rx.await.ok();
        },
    );
    tokio::task::spawn(server);

    (addr, tx)
}

fn cache_for(addr: SocketAddr, total_entries: u32) -> CatalogCache {
    let client = PokeApiClient::new(&format!("http://{}/pokemon", addr));
    CatalogCache::new(client, total_entries)
}

/// Nothing listens on port 9; every fetch fails with a transport error.
fn unreachable_cache(total_entries: u32) -> CatalogCache {
    CatalogCache::new(PokeApiClient::new("http://127.0.0.1:9/pokemon"), total_entries)
}

#[tokio::test]
async fn build_preserves_id_order_and_normalizes() {
    let (addr, _stub) = spawn_stub_upstream(&[]);
    let cache = cache_for(addr, 5);

    let all = cache.get_all().await;

    assert_eq!(all.len(), 5);
    let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
    assert_eq!(all[0].name, "Creature-1");
    assert_eq!(all[0].region, "Kanto");
    assert_eq!(all[0].types, ["grass", "psychic"]);
    assert_eq!(all[0].weaknesses, ["fire", "ghost"]);
}

#[tokio::test]
async fn partial_failure_drops_failed_ids() {
    let (addr, _stub) = spawn_stub_upstream(&[2, 4]);
    let cache = cache_for(addr, 5);

    let all = cache.get_all().await;

    let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 3, 5]);
}

#[tokio::test]
async fn total_failure_serves_placeholder_catalog() {
    let cache = unreachable_cache(20);

    let all = cache.get_all().await;

    assert_eq!(all.len(), 10);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].name, "Pokemon 1");
    assert_eq!(all[0].region, "Unknown");
    assert_eq!(all[0].weaknesses, ["fighting"]);
}

#[tokio::test]
async fn pagination_boundaries_on_placeholder_catalog() {
    let cache = unreachable_cache(20);

    let tail = cache.get_page(1, 8).await;
    let names: Vec<&str> = tail.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Pokemon 9", "Pokemon 10"]);

    assert!(cache.get_page(10, 5).await.is_empty());

    let head = cache.get_page(0, 5).await;
    let names: Vec<&str> = head.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Pokemon 1", "Pokemon 2", "Pokemon 3", "Pokemon 4", "Pokemon 5"]
    );
}

#[tokio::test]
async fn get_by_id_hits_and_misses() {
    let (addr, _stub) = spawn_stub_upstream(&[]);
    let cache = cache_for(addr, 5);

    let pokemon = cache.get_by_id(3).await.unwrap();
    assert_eq!(pokemon.id, 3);
    assert_eq!(pokemon.name, "Creature-3");

    match cache.get_by_id(999).await {
        Err(e @ CatalogError::NotFound(999)) => {
            assert_eq!(e.to_string(), "Pokemon with ID 999 not found");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn get_all_is_memoized_until_rebuild() {
    let (addr, _stub) = spawn_stub_upstream(&[]);
    let cache = cache_for(addr, 3);

    let first = cache.get_all().await;
    let second = cache.get_all().await;
    assert!(Arc::ptr_eq(&first, &second));

    let rebuilt = cache.rebuild().await;
    assert!(!Arc::ptr_eq(&first, &rebuilt));
    assert_eq!(rebuilt.len(), 3);

    let after = cache.get_all().await;
    assert!(Arc::ptr_eq(&rebuilt, &after));
}

#[tokio::test]
async fn failed_rebuild_replaces_snapshot_with_placeholders() {
    let (addr, stub) = spawn_stub_upstream(&[]);
    let cache = cache_for(addr, 3);

    let all = cache.get_all().await;
    assert_eq!(all.len(), 3);

    // Kill the upstream; the next rebuild must still replace the snapshot.
    stub.send(()).ok();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let rebuilt = cache.rebuild().await;
    assert_eq!(rebuilt.len(), 10);
    assert_eq!(rebuilt[0].name, "Pokemon 1");

    let after = cache.get_all().await;
    assert!(Arc::ptr_eq(&rebuilt, &after));
}
