//! Storage traits for persisted overrides.
//!
//! These traits define interfaces for the override store:
//! - [`StateOverrideStore`]: state-level replacements, queried by `(state, subject)`
//! - [`DistrictStandardStore`]: district custom standards, queried by `(district, subject, grade)`
//! - [`SchoolOverrideStore`]: school description overrides, queried by `school`
//!
//! Storage implementations are EXTENSIONS (e.g., redb, in-memory).
//!
//! Queries are plain equality filters. Implementations must return results
//! in query order (see [`curricula_core::sort_in_query_order`]).

use std::sync::Arc;

use async_trait::async_trait;

use curricula_core::{
    DistrictId, DistrictStandard, Grade, Jurisdiction, RecordId, SchoolId, SchoolOverride,
    StateOverride, Subject,
};

use crate::error::TraitError;

// =============================================================================
// STATE OVERRIDE STORE
// =============================================================================

/// State override storage.
#[async_trait]
pub trait StateOverrideStore: Send + Sync {
    /// Overrides for `(state, subject)`. Grade is deliberately not a filter.
    async fn query(
        &self,
        state: &Jurisdiction,
        subject: &Subject,
    ) -> Result<Vec<StateOverride>, TraitError>;

    /// Insert (or replace by ID) an override.
    async fn insert(&self, record: &StateOverride) -> Result<(), TraitError>;

    /// Delete an override. Returns false if it did not exist.
    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError>;
}

// =============================================================================
// DISTRICT STANDARD STORE
// =============================================================================

/// District custom standard storage.
#[async_trait]
pub trait DistrictStandardStore: Send + Sync {
    /// Custom standards for `(district, subject, grade)`.
    async fn query(
        &self,
        district_id: &DistrictId,
        subject: &Subject,
        grade: Grade,
    ) -> Result<Vec<DistrictStandard>, TraitError>;

    /// Insert (or replace by ID) a custom standard.
    async fn insert(&self, record: &DistrictStandard) -> Result<(), TraitError>;

    /// Delete a custom standard. Returns false if it did not exist.
    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError>;
}

// =============================================================================
// SCHOOL OVERRIDE STORE
// =============================================================================

/// School override storage.
#[async_trait]
pub trait SchoolOverrideStore: Send + Sync {
    /// Every override owned by `school_id`, with no subject or grade filter.
    async fn query(&self, school_id: &SchoolId) -> Result<Vec<SchoolOverride>, TraitError>;

    /// Insert (or replace by ID) an override.
    async fn insert(&self, record: &SchoolOverride) -> Result<(), TraitError>;

    /// Delete an override. Returns false if it did not exist.
    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError>;
}

// =============================================================================
// STORAGE ADAPTER
// =============================================================================

/// Combined storage adapter.
#[derive(Clone)]
pub struct StorageAdapter {
    /// State override store
    pub state_overrides: Arc<dyn StateOverrideStore>,
    /// District standard store
    pub district_standards: Arc<dyn DistrictStandardStore>,
    /// School override store
    pub school_overrides: Arc<dyn SchoolOverrideStore>,
}

impl StorageAdapter {
    /// Build an adapter where one value serves all three collections.
    pub fn from_shared<S>(store: Arc<S>) -> Self
    where
        S: StateOverrideStore + DistrictStandardStore + SchoolOverrideStore + 'static,
    {
        Self {
            state_overrides: store.clone(),
            district_standards: store.clone(),
            school_overrides: store,
        }
    }
}

impl std::fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAdapter").finish_non_exhaustive()
    }
}
