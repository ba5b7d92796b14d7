//! Resolution configuration.
//!
//! Configuration contains:
//! - Per-read store timeout
//! - The jurisdiction treated as "national baseline only"
//!
//! Configuration does NOT contain:
//! - Catalog content (that's built in)
//! - Override records (that's the store)

use serde::{Deserialize, Serialize};
use std::time::Duration;

use curricula_core::Jurisdiction;

/// Default timeout for a single store read.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolution engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Engine name (for logging)
    #[serde(default = "default_name")]
    pub name: String,

    /// Timeout applied independently to each override-store read.
    /// A read that times out is treated as a failed read.
    #[serde(default = "default_store_timeout")]
    pub store_timeout: Duration,

    /// Jurisdiction that means "national baseline only".
    #[serde(default)]
    pub default_jurisdiction: Jurisdiction,
}

fn default_name() -> String {
    "curricula".to_string()
}

fn default_store_timeout() -> Duration {
    DEFAULT_STORE_TIMEOUT
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            default_jurisdiction: Jurisdiction::national(),
        }
    }
}

impl ResolutionConfig {
    /// Set the per-read store timeout.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Set the default jurisdiction.
    pub fn with_default_jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.default_jurisdiction = jurisdiction;
        self
    }
}
