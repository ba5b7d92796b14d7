//! In-memory override store.

use async_trait::async_trait;
use dashmap::DashMap;

use curricula_core::{
    sort_in_query_order, DistrictId, DistrictStandard, Grade, Jurisdiction, RecordId, SchoolId,
    SchoolOverride, StateOverride, Subject,
};
use curricula_traits::error::TraitError;
use curricula_traits::storage::{DistrictStandardStore, SchoolOverrideStore, StateOverrideStore};

/// In-memory store for all three override collections.
///
/// Useful for tests, demos, and seeded read-only deployments.
pub struct InMemoryStandardsStore {
    state_overrides: DashMap<RecordId, StateOverride>,
    district_standards: DashMap<RecordId, DistrictStandard>,
    school_overrides: DashMap<RecordId, SchoolOverride>,
}

impl InMemoryStandardsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            state_overrides: DashMap::new(),
            district_standards: DashMap::new(),
            school_overrides: DashMap::new(),
        }
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.state_overrides.len() + self.district_standards.len() + self.school_overrides.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every record.
    pub fn clear(&self) {
        self.state_overrides.clear();
        self.district_standards.clear();
        self.school_overrides.clear();
    }
}

impl Default for InMemoryStandardsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect matching values in query order.
fn collect<T: Clone + curricula_core::Persisted>(
    map: &DashMap<RecordId, T>,
    filter: impl Fn(&T) -> bool,
) -> Vec<T> {
    let mut records: Vec<T> = map
        .iter()
        .filter(|r| filter(r.value()))
        .map(|r| r.value().clone())
        .collect();
    sort_in_query_order(&mut records);
    records
}

#[async_trait]
impl StateOverrideStore for InMemoryStandardsStore {
    async fn query(
        &self,
        state: &Jurisdiction,
        subject: &Subject,
    ) -> Result<Vec<StateOverride>, TraitError> {
        Ok(collect(&self.state_overrides, |o| {
            &o.state == state && &o.subject == subject
        }))
    }

    async fn insert(&self, record: &StateOverride) -> Result<(), TraitError> {
        self.state_overrides.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError> {
        Ok(self.state_overrides.remove(id).is_some())
    }
}

#[async_trait]
impl DistrictStandardStore for InMemoryStandardsStore {
    async fn query(
        &self,
        district_id: &DistrictId,
        subject: &Subject,
        grade: Grade,
    ) -> Result<Vec<DistrictStandard>, TraitError> {
        Ok(collect(&self.district_standards, |d| {
            &d.district_id == district_id && &d.subject == subject && d.grade == grade
        }))
    }

    async fn insert(&self, record: &DistrictStandard) -> Result<(), TraitError> {
        self.district_standards.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError> {
        Ok(self.district_standards.remove(id).is_some())
    }
}

#[async_trait]
impl SchoolOverrideStore for InMemoryStandardsStore {
    async fn query(&self, school_id: &SchoolId) -> Result<Vec<SchoolOverride>, TraitError> {
        Ok(collect(&self.school_overrides, |o| &o.school_id == school_id))
    }

    async fn insert(&self, record: &SchoolOverride) -> Result<(), TraitError> {
        self.school_overrides.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError> {
        Ok(self.school_overrides.remove(id).is_some())
    }
}
