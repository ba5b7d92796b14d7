//! Server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use curricula_core::Jurisdiction;
use curricula_traits::ResolutionConfig;

/// Override store backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Embedded redb file at `storage_path`
    #[default]
    Redb,
    /// Process memory, lost on restart
    Memory,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Override store backend
    #[serde(default)]
    pub storage: StorageBackend,

    /// Storage path (redb backend only)
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// JSON seed file loaded at startup
    pub seed_file: Option<String>,

    /// District standards CSV loaded at startup
    pub district_seed_csv: Option<String>,

    /// Per-read store timeout in milliseconds
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,

    /// Jurisdiction treated as the national baseline
    #[serde(default = "default_jurisdiction")]
    pub default_jurisdiction: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage_path() -> String {
    "./data/curricula.redb".to_string()
}

fn default_store_timeout_ms() -> u64 {
    2_000
}

fn default_jurisdiction() -> String {
    Jurisdiction::NATIONAL_CODE.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            storage: StorageBackend::default(),
            storage_path: default_storage_path(),
            seed_file: None,
            district_seed_csv: None,
            store_timeout_ms: default_store_timeout_ms(),
            default_jurisdiction: default_jurisdiction(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Engine configuration derived from the server settings.
    pub fn resolution_config(&self) -> ResolutionConfig {
        ResolutionConfig::default()
            .with_store_timeout(Duration::from_millis(self.store_timeout_ms))
            .with_default_jurisdiction(Jurisdiction::new(&self.default_jurisdiction))
    }
}
