//! Raw PokeAPI payload to normalized catalog entry.

use serde_json::Value;

use crate::error::CatalogError;
use crate::pokemon::Pokemon;

/// The first 150 entries are all Kanto natives.
const REGION: &str = "Kanto";

/// Parse one raw PokeAPI document into a catalog entry.
///
/// Pulls the name, both sprite URLs and the ordered type tags out of the
/// nested document. Any missing or malformed field fails the whole entry.
pub fn parse_entry(payload: &Value, id: u32) -> Result<Pokemon, CatalogError> {
    let name = capitalize(payload.get("name").and_then(Value::as_str))
        .ok_or_else(|| parse_failed(id, "missing name"))?;

    let sprites = payload
        .get("sprites")
        .ok_or_else(|| parse_failed(id, "missing sprites"))?;
    let front_image = sprites
        .get("front_default")
        .and_then(Value::as_str)
        .ok_or_else(|| parse_failed(id, "missing sprites.front_default"))?
        .to_string();
    let back_image = sprites
        .get("back_default")
        .and_then(Value::as_str)
        .ok_or_else(|| parse_failed(id, "missing sprites.back_default"))?
        .to_string();

    let types = payload
        .get("types")
        .and_then(Value::as_array)
        .ok_or_else(|| parse_failed(id, "missing types"))?
        .iter()
        .map(|entry| {
            entry
                .get("type")
                .and_then(|t| t.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| parse_failed(id, "malformed types entry"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let weaknesses = weaknesses(&types);

    Ok(Pokemon {
        id,
        name,
        types,
        front_image,
        back_image,
        region: REGION.to_string(),
        weaknesses,
    })
}

fn parse_failed(id: u32, reason: &str) -> CatalogError {
    CatalogError::ParseFailed {
        id,
        reason: reason.to_string(),
    }
}

/// One weakness per type tag, in tag order. A fixed table rather than the
/// full type chart; unknown tags map to "normal".
pub fn weaknesses(types: &[String]) -> Vec<String> {
    types
        .iter()
        .map(|tag| {
            match tag.to_lowercase().as_str() {
                "fire" => "water",
                "water" => "electric",
                "grass" => "fire",
                "electric" => "ground",
                "psychic" => "ghost",
                "rock" => "water",
                _ => "normal",
            }
            .to_string()
        })
        .collect()
}

/// Upper-case the first character, leave the rest alone. Absent and empty
/// names pass through unchanged.
pub fn capitalize(name: Option<&str>) -> Option<String> {
    let name = name?;
    let mut chars = name.chars();
    Some(match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    })
}
