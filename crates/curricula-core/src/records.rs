//! Persisted override and custom-standard records.
//!
//! Three kinds of record live in the override store:
//! - [`StateOverride`]: replaces a baseline standard with a state-specific one
//! - [`DistrictStandard`]: appended, never replaces
//! - [`SchoolOverride`]: replaces only the description of an existing entry
//!
//! None of them is checked against a catalog when written. A record that
//! targets a standard absent at resolution time is a no-op.

use serde::{Deserialize, Serialize};

use crate::error::{require, Validate, ValidationError};
use crate::ids::{DistrictId, RecordId, SchoolId, StandardId};
use crate::types::{Grade, Jurisdiction, Subject};

/// Common accessors for persisted records.
pub trait Persisted {
    /// Store-generated identifier.
    fn id(&self) -> &RecordId;

    /// Creation time (Unix millis).
    fn created_at(&self) -> i64;
}

/// Sort records into query order: oldest first, ties broken by ID.
///
/// Every store returns query results in this order so that appended
/// district standards land in the same position on every call.
pub fn sort_in_query_order<T: Persisted>(records: &mut [T]) {
    records.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}

// =============================================================================
// STATE OVERRIDE
// =============================================================================

/// State-level replacement of a baseline standard.
///
/// Filtered by `(state, subject)` only. Grade is not part of the filter, so
/// an override can hit a same-ID standard at any grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOverride {
    /// Record ID
    #[serde(default)]
    pub id: RecordId,
    /// State the override applies to
    pub state: Jurisdiction,
    /// Subject the override applies to
    pub subject: Subject,
    /// Standard being replaced
    pub replaces_standard_id: StandardId,
    /// Identifier of the replacement
    pub new_standard_id: StandardId,
    /// Replacement text
    pub description: String,
    /// Created at (Unix millis)
    #[serde(default)]
    pub created_at: i64,
}

impl Validate for StateOverride {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "state", self.state.code());
        require(&mut errors, "subject", self.subject.name());
        require(&mut errors, "replaces_standard_id", self.replaces_standard_id.as_str());
        require(&mut errors, "new_standard_id", self.new_standard_id.as_str());
        require(&mut errors, "description", &self.description);
        errors
    }
}

impl Persisted for StateOverride {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

// =============================================================================
// DISTRICT STANDARD
// =============================================================================

/// District custom standard. Always appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictStandard {
    /// Record ID, also used as the resolved standard ID
    #[serde(default)]
    pub id: RecordId,
    /// Owning district
    pub district_id: DistrictId,
    /// Subject
    pub subject: Subject,
    /// Grade
    pub grade: Grade,
    /// Standard text
    pub description: String,
    /// Created at (Unix millis)
    #[serde(default)]
    pub created_at: i64,
}

impl Validate for DistrictStandard {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "district_id", self.district_id.as_str());
        require(&mut errors, "subject", self.subject.name());
        require(&mut errors, "description", &self.description);
        errors
    }
}

impl Persisted for DistrictStandard {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

// =============================================================================
// SCHOOL OVERRIDE
// =============================================================================

/// School-level description override.
///
/// Filtered by `school_id` only, with no subject or grade filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolOverride {
    /// Record ID
    #[serde(default)]
    pub id: RecordId,
    /// Owning school
    pub school_id: SchoolId,
    /// Standard whose description is replaced
    pub overrides_standard_id: StandardId,
    /// Replacement description
    pub custom_description: String,
    /// Created at (Unix millis)
    #[serde(default)]
    pub created_at: i64,
}

impl Validate for SchoolOverride {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "school_id", self.school_id.as_str());
        require(&mut errors, "overrides_standard_id", self.overrides_standard_id.as_str());
        require(&mut errors, "custom_description", &self.custom_description);
        errors
    }
}

impl Persisted for SchoolOverride {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}
