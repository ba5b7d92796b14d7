//! # Curricula Engine
//!
//! The hierarchical standards resolution engine for Curricula.
//!
//! This crate provides:
//! - [`ResolutionEngine`]: merges the five layers into one ordered list
//! - [`StandardsAdmin`]: create/delete for persisted overrides and custom standards
//! - [`ResolutionEngineBuilder`]: wires catalog, storage and configuration
//!
//! ## Architecture
//!
//! ```text
//! request ─┬─> CatalogProvider (national)      ─> 1. baseline
//!          ├─> CatalogProvider (jurisdiction)  ─> 2. replace-or-append by ID
//!          │
//!          └─> StorageAdapter ─┬─ state overrides    ─> 3. replace identity
//!              (concurrent,    ├─ district standards ─> 4. append
//!               timed reads)   └─ school overrides   ─> 5. replace description
//! ```
//!
//! Steps 3-5 are read concurrently but always applied in that order. A
//! failed or timed-out read leaves its layer empty; resolution itself never
//! fails.
//!
//! ## Usage
//!
//! ```ignore
//! let engine = ResolutionEngineBuilder::new()
//!     .with_storage(storage_adapter)
//!     .build()?;
//!
//! let request = ResolutionRequest::new("CA", "Math", 4u32).with_district("d1");
//! let standards = engine.resolve_standards(&request).await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod admin;
pub mod builder;
pub mod engine;
pub mod error;
pub mod merge;
pub mod request;

// Re-exports
pub use admin::StandardsAdmin;
pub use builder::ResolutionEngineBuilder;
pub use engine::ResolutionEngine;
pub use error::EngineError;
pub use merge::MergeStats;
pub use request::{Layer, Resolution, ResolutionRequest};
