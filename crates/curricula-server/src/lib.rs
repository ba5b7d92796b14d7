//! # Curricula Server
//!
//! REST server for the Curricula standards resolution engine.
//!
//! ## Features
//!
//! - Standards resolution and lesson-plan projection
//! - Admin endpoints for state overrides, district standards and school overrides
//! - Health endpoint
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use curricula_server::Server;
//!
//! let server = Server::new(config, engine);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use curricula_engine::ResolutionEngine;
use curricula_ext_file::SeedData;
use curricula_traits::{StorageAdapter, TraitError};

pub use config::{ServerConfig, StorageBackend};

/// The Curricula server.
pub struct Server {
    config: ServerConfig,
    engine: Arc<ResolutionEngine>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, engine: Arc<ResolutionEngine>) -> Self {
        Self { config, engine }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.engine.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Curricula server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}

/// Open the configured override store and apply any seed files.
pub async fn open_storage(config: &ServerConfig) -> Result<StorageAdapter, TraitError> {
    let storage = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory override store");
            curricula_ext_file::create_memory_storage()
        }
        StorageBackend::Redb => {
            let path = Path::new(&config.storage_path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            info!("Opening redb override store at {}", path.display());
            curricula_ext_redb::create_redb_storage(path)?
        }
    };

    let mut seed = SeedData::default();
    if let Some(file) = &config.seed_file {
        seed = SeedData::from_json_file(file)?;
    }
    if let Some(csv) = &config.district_seed_csv {
        seed = seed.with_district_csv(csv)?;
    }
    if !seed.is_empty() {
        seed.load_into(&storage).await?;
    }

    Ok(storage)
}
