//! Builder pattern for the resolution engine.

use std::sync::Arc;

use curricula_catalog::BuiltinCatalog;
use curricula_traits::{CatalogProvider, ResolutionConfig, StorageAdapter};

use crate::engine::ResolutionEngine;
use crate::error::EngineError;

/// Builder for constructing a [`ResolutionEngine`].
#[derive(Default)]
pub struct ResolutionEngineBuilder {
    config: Option<ResolutionConfig>,
    catalog: Option<Arc<dyn CatalogProvider>>,
    storage: Option<StorageAdapter>,
}

impl ResolutionEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine configuration.
    pub fn with_config(mut self, config: ResolutionConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the baseline catalog. Defaults to [`BuiltinCatalog`].
    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogProvider>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the override storage.
    pub fn with_storage(mut self, storage: StorageAdapter) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the resolution engine.
    pub fn build(self) -> Result<ResolutionEngine, EngineError> {
        let config = self.config.unwrap_or_default();

        if config.store_timeout.is_zero() {
            return Err(EngineError::ConfigError("store_timeout must be positive".into()));
        }

        let storage = self
            .storage
            .ok_or_else(|| EngineError::ConfigError("storage not configured".into()))?;

        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(BuiltinCatalog::default()));

        Ok(ResolutionEngine::new(config, catalog, storage))
    }
}
