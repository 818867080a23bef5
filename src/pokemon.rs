use serde::{Deserialize, Serialize};

/// One normalized catalog entry as the frontend consumes it.
///
/// Field names go camelCase on the wire (`frontImage`, `backImage`), which
/// is the JSON contract the frontend was written against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Ordered type tags, 1-2 entries for the first generation.
    pub types: Vec<String>,
    pub front_image: String,
    pub back_image: String,
    pub region: String,
    /// One derived weakness per type tag, same order as `types`.
    pub weaknesses: Vec<String>,
}
