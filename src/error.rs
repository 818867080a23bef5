use thiserror::Error;

/// Failures along the fetch/parse/lookup pipeline.
///
/// `FetchFailed` and `ParseFailed` are recovered during a catalog build:
/// the affected id is dropped and the error only shows up in the logs.
/// `NotFound` travels all the way out as a 404.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not fetch entry {id} from upstream")]
    FetchFailed {
        id: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed payload for entry {id}: {reason}")]
    ParseFailed { id: u32, reason: String },
    #[error("Pokemon with ID {0} not found")]
    NotFound(u32),
}
