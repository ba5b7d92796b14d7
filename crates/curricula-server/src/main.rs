//! Curricula server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curricula_engine::ResolutionEngineBuilder;
use curricula_server::{open_storage, Server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,curricula=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Curricula Standards Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/curricula.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Create storage
    let storage = open_storage(&server_config).await?;

    // Build engine
    let engine = ResolutionEngineBuilder::new()
        .with_config(server_config.resolution_config())
        .with_storage(storage)
        .build()?;

    // Start server
    let server = Server::new(server_config, Arc::new(engine));
    server.start().await?;

    Ok(())
}
