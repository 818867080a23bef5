use std::sync::Arc;
use warp::{filters::BoxedFilter, Filter, Reply};

use super::handlers::{self, PageQuery};
use super::State;

pub fn router(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    // The frontend is served from a different origin.
    let cors = warp::cors().allow_any_origin();

    pokemon_by_id(Arc::clone(&state))
        .or(pokemons(state))
        .with(cors)
        .boxed()
}

fn pokemons(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    let route = warp::path("api")
        .and(warp::path("pokemons"))
        .and(warp::path::end())
        .and(warp::query::<PageQuery>())
        .and_then(move |query: PageQuery| handlers::page_handler(Arc::clone(&state), query));

    warp::get().and(route).boxed()
}

fn pokemon_by_id(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    let route = warp::path("api")
        .and(warp::path("pokemons"))
        .and(warp::path::param::<u32>())
        .and(warp::path::end())
        .and_then(move |id: u32| handlers::by_id_handler(Arc::clone(&state), id));

    warp::get().and(route).boxed()
}
