//! # Curricula Traits
//!
//! Trait definitions for the Curricula resolution engine.
//!
//! This crate contains ONLY trait definitions with ZERO runtime dependencies.
//! All implementations are in separate crates.
//!
//! ## Module Structure
//!
//! - [`catalog`]: The built-in baseline catalog seam
//! - [`storage`]: Override store seams (state overrides, district standards, school overrides)
//! - [`config`]: Resolution configuration
//!
//! ## Dependency Injection
//!
//! The resolution engine uses these traits via dependency injection:
//!
//! ```ignore
//! ResolutionEngineBuilder::new()
//!     .with_catalog(impl CatalogProvider)
//!     .with_storage(StorageAdapter { .. })
//!     .with_config(ResolutionConfig::default())
//!     .build()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use catalog::CatalogProvider;
pub use config::ResolutionConfig;
pub use error::TraitError;
pub use storage::{DistrictStandardStore, SchoolOverrideStore, StateOverrideStore, StorageAdapter};
