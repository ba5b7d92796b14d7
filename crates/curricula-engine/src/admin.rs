//! Standards admin API.
//!
//! Thin create/delete wrapper over the override store. Records are checked
//! for non-empty required fields only; whether an override's target exists
//! is decided lazily at resolution time.

use tracing::info;

use curricula_core::{
    DistrictId, DistrictStandard, Grade, Jurisdiction, RecordId, SchoolId, SchoolOverride,
    StandardId, StateOverride, Subject, Validate, ValidationError,
};
use curricula_traits::StorageAdapter;

use crate::error::EngineError;

/// Create/delete operations for persisted overrides and custom standards.
#[derive(Debug, Clone)]
pub struct StandardsAdmin {
    storage: StorageAdapter,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reject the write before any store call if the record is invalid.
fn check<T: Validate>(record: &T) -> Result<(), EngineError> {
    let errors = record.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Validation(errors))
    }
}

fn check_id(id: &RecordId) -> Result<(), EngineError> {
    if id.is_blank() {
        return Err(EngineError::Validation(vec![ValidationError::required("id")]));
    }
    Ok(())
}

impl StandardsAdmin {
    /// Create an admin over the given storage.
    pub fn new(storage: StorageAdapter) -> Self {
        Self { storage }
    }

    /// Add a district custom standard.
    pub async fn add_district_standard(
        &self,
        district_id: impl Into<DistrictId>,
        subject: impl Into<Subject>,
        grade: impl Into<Grade>,
        description: impl Into<String>,
    ) -> Result<DistrictStandard, EngineError> {
        let record = DistrictStandard {
            id: RecordId::generate(),
            district_id: district_id.into(),
            subject: subject.into(),
            grade: grade.into(),
            description: description.into(),
            created_at: now_millis(),
        };
        check(&record)?;

        self.storage.district_standards.insert(&record).await?;
        info!(id = %record.id, district = %record.district_id, "district standard added");
        Ok(record)
    }

    /// Add a school description override.
    pub async fn add_school_override(
        &self,
        school_id: impl Into<SchoolId>,
        standard_id: impl Into<StandardId>,
        custom_description: impl Into<String>,
    ) -> Result<SchoolOverride, EngineError> {
        let record = SchoolOverride {
            id: RecordId::generate(),
            school_id: school_id.into(),
            overrides_standard_id: standard_id.into(),
            custom_description: custom_description.into(),
            created_at: now_millis(),
        };
        check(&record)?;

        self.storage.school_overrides.insert(&record).await?;
        info!(id = %record.id, school = %record.school_id, "school override added");
        Ok(record)
    }

    /// Add a state override.
    pub async fn add_state_override(
        &self,
        state: impl Into<Jurisdiction>,
        subject: impl Into<Subject>,
        replaces_standard_id: impl Into<StandardId>,
        new_standard_id: impl Into<StandardId>,
        description: impl Into<String>,
    ) -> Result<StateOverride, EngineError> {
        let record = StateOverride {
            id: RecordId::generate(),
            state: state.into(),
            subject: subject.into(),
            replaces_standard_id: replaces_standard_id.into(),
            new_standard_id: new_standard_id.into(),
            description: description.into(),
            created_at: now_millis(),
        };
        check(&record)?;

        self.storage.state_overrides.insert(&record).await?;
        info!(id = %record.id, state = %record.state, "state override added");
        Ok(record)
    }

    /// Delete a district custom standard. Returns false if it did not exist.
    pub async fn delete_district_standard(&self, id: &RecordId) -> Result<bool, EngineError> {
        check_id(id)?;
        Ok(self.storage.district_standards.delete(id).await?)
    }

    /// Delete a school override. Returns false if it did not exist.
    pub async fn delete_school_override(&self, id: &RecordId) -> Result<bool, EngineError> {
        check_id(id)?;
        Ok(self.storage.school_overrides.delete(id).await?)
    }

    /// Delete a state override. Returns false if it did not exist.
    pub async fn delete_state_override(&self, id: &RecordId) -> Result<bool, EngineError> {
        check_id(id)?;
        Ok(self.storage.state_overrides.delete(id).await?)
    }
}
