//! # Curricula Ext File
//!
//! In-memory storage and file-based seed data for the Curricula engine.
//!
//! This crate provides default implementations for testing, demos, and
//! read-mostly deployments:
//! - [`InMemoryStandardsStore`]: all three override collections in memory
//! - [`SeedData`]: JSON seed file and district standard CSV loading
//!
//! For durable storage, use the redb extension.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod memory;
mod seed;

pub use memory::*;
pub use seed::*;

use std::path::Path;
use std::sync::Arc;

use curricula_traits::error::TraitError;
use curricula_traits::StorageAdapter;

/// Create an empty in-memory storage adapter.
pub fn create_memory_storage() -> StorageAdapter {
    StorageAdapter::from_shared(Arc::new(InMemoryStandardsStore::new()))
}

/// Create an in-memory storage adapter preloaded from seed files.
///
/// Either path may point at a missing file, which contributes nothing.
pub async fn create_seeded_memory_storage(
    seed_json: impl AsRef<Path>,
    district_csv: impl AsRef<Path>,
) -> Result<StorageAdapter, TraitError> {
    let storage = create_memory_storage();
    SeedData::from_json_file(seed_json)?
        .with_district_csv(district_csv)?
        .load_into(&storage)
        .await?;
    Ok(storage)
}
