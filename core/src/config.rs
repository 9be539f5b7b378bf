//! Client configuration passed in by the embedding application.
//!
//! Nothing is read from the environment or the filesystem. `HereConfig`
//! derives `Deserialize` so an application can embed it in its own settings
//! file; any host left out falls back to the public HERE endpoint.

use serde::{Deserialize, Serialize};

use crate::types::Credentials;

pub const DEFAULT_GEOCODING_HOST: &str = "https://geocoder.cit.api.here.com";
pub const DEFAULT_MAP_TILE_HOST: &str = "https://image.maps.cit.api.here.com";
pub const DEFAULT_AUTOSUGGESTION_HOST: &str = "https://places.cit.api.here.com";

/// Base URL for each upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hosts {
    #[serde(default = "default_geocoding_host")]
    pub geocoding: String,
    #[serde(default = "default_map_tile_host")]
    pub map_tile: String,
    #[serde(default = "default_autosuggestion_host")]
    pub autosuggestion: String,
}

fn default_geocoding_host() -> String {
    DEFAULT_GEOCODING_HOST.to_string()
}

fn default_map_tile_host() -> String {
    DEFAULT_MAP_TILE_HOST.to_string()
}

fn default_autosuggestion_host() -> String {
    DEFAULT_AUTOSUGGESTION_HOST.to_string()
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            geocoding: default_geocoding_host(),
            map_tile: default_map_tile_host(),
            autosuggestion: default_autosuggestion_host(),
        }
    }
}

impl Hosts {
    /// Point all three services at one base URL (a proxy or a mock server).
    pub fn all(host: &str) -> Self {
        Self {
            geocoding: host.to_string(),
            map_tile: host.to_string(),
            autosuggestion: host.to_string(),
        }
    }
}

/// Everything a client needs: credentials plus service hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HereConfig {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub hosts: Hosts,
}

impl HereConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            hosts: Hosts::default(),
        }
    }

    pub fn with_hosts(mut self, hosts: Hosts) -> Self {
        self.hosts = hosts;
        self
    }
}
