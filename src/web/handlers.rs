use std::{convert::Infallible, sync::Arc};
use warp::http::StatusCode;
use warp::Reply;

use crate::error::CatalogError;
use super::State;

/// Query parameters for the infinite-scroll page endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub size: usize,
}

pub async fn page_handler(
    state: Arc<State>,
    query: PageQuery,
) -> std::result::Result<impl Reply, Infallible> {
    let page = state.catalog.get_page(query.page, query.size).await;
    Ok(warp::reply::json(&page).into_response())
}

pub async fn by_id_handler(
    state: Arc<State>,
    id: u32,
) -> std::result::Result<impl Reply, Infallible> {
    Ok(match state.catalog.get_by_id(id).await {
        Ok(pokemon) => warp::reply::json(&pokemon).into_response(),
        Err(e @ CatalogError::NotFound(_)) => {
            warp::reply::with_status(e.to_string(), StatusCode::NOT_FOUND).into_response()
        }
        Err(e) => {
            tracing::error!("error looking up entry {}: {:#?}", id, e);
            warp::reply::with_status(
                format!("Oops! Something went wrong: {}", e),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response()
        }
    })
}
