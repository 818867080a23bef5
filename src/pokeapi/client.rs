//! PokeAPI REST client.
//!
//! One GET per creature id, no retries and no per-call timeout. A failed
//! call marks that id as unavailable for the current build; what to do
//! about the gap is the caller's decision.

use serde_json::Value;

use crate::error::CatalogError;

/// PokeAPI endpoint serving one creature document per id.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the raw JSON document for one catalog id.
    ///
    /// Transport errors and non-2xx statuses come back as `FetchFailed`;
    /// a body that isn't JSON comes back as `ParseFailed`.
    pub async fn fetch_raw(&self, id: u32) -> Result<Value, CatalogError> {
        let url = format!("{}/{}", self.base_url, id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| CatalogError::FetchFailed { id, source })?;

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseFailed {
                id,
                reason: format!("body is not valid JSON: {}", e),
            })
    }
}
