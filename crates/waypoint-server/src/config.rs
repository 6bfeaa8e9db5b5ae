use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use waypoint_types::HtmlHandling;

use crate::error::{ServeError, ServeResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub html_handling: HtmlHandling,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8787".parse().expect("valid literal addr"),
            html_handling: HtmlHandling::default(),
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file; missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> ServeResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServeError::Config(e.to_string()))
    }
}
