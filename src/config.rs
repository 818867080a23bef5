use serde::Deserialize;
use std::net::SocketAddr;

use crate::pokeapi::client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub web: Web,
    #[serde(default)]
    pub pokeapi: PokeApi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    pub host: SocketAddr,
}

/// Upstream catalog settings. Everything has a sensible default, so a
/// config file with only `[web]` in it is enough to run.
#[derive(Debug, Clone, Deserialize)]
pub struct PokeApi {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// First generation only.
    #[serde(default = "default_total_entries")]
    pub total_entries: u32,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            total_entries: default_total_entries(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_total_entries() -> u32 {
    150
}

fn default_refresh_interval_secs() -> u64 {
    3600
}
