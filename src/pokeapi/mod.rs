//! PokeAPI upstream integration: the REST client and the payload mapper.

pub mod client;
pub mod mapping;

pub use client::PokeApiClient;
