//! Resolution requests, layers and results.

use serde::{Deserialize, Serialize};
use std::fmt;

use curricula_core::{DistrictId, Grade, Jurisdiction, ResolvedStandard, SchoolId, Subject};

/// One of the five ordered merge steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// National baseline catalog.
    National,
    /// Jurisdiction baseline catalog.
    StateBaseline,
    /// Persisted state overrides.
    StateOverride,
    /// District custom standards.
    District,
    /// Persisted school overrides.
    School,
}

impl Layer {
    /// Snake-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::National => "national",
            Layer::StateBaseline => "state_baseline",
            Layer::StateOverride => "state_override",
            Layer::District => "district",
            Layer::School => "school",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution key: `(jurisdiction, subject, grade, district?, school?)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// Jurisdiction. The configured default means "national baseline only".
    pub jurisdiction: Jurisdiction,
    /// Subject
    pub subject: Subject,
    /// Grade
    pub grade: Grade,
    /// Optional district whose custom standards are appended
    pub district_id: Option<DistrictId>,
    /// Optional school whose overrides are applied last
    pub school_id: Option<SchoolId>,
}

impl ResolutionRequest {
    /// Create a request without district or school scope.
    pub fn new(
        jurisdiction: impl Into<Jurisdiction>,
        subject: impl Into<Subject>,
        grade: impl Into<Grade>,
    ) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            subject: subject.into(),
            grade: grade.into(),
            district_id: None,
            school_id: None,
        }
    }

    /// National-baseline request.
    pub fn national(subject: impl Into<Subject>, grade: impl Into<Grade>) -> Self {
        Self::new(Jurisdiction::national(), subject, grade)
    }

    /// Builder method to set the district.
    pub fn with_district(mut self, district_id: impl Into<DistrictId>) -> Self {
        self.district_id = Some(district_id.into());
        self
    }

    /// Builder method to set the school.
    pub fn with_school(mut self, school_id: impl Into<SchoolId>) -> Self {
        self.school_id = Some(school_id.into());
        self
    }
}

/// Outcome of a resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Merged standards, in first-insertion order.
    pub standards: Vec<ResolvedStandard>,
    /// Layers whose store read failed or timed out and were treated as empty.
    pub degraded_layers: Vec<Layer>,
    /// Records dropped because their target was absent or their
    /// resulting standard ID was already taken.
    pub dropped_overrides: usize,
}

impl Resolution {
    /// True if any store-backed layer was skipped.
    pub fn is_degraded(&self) -> bool {
        !self.degraded_layers.is_empty()
    }

    /// Lesson-plan lines, `"<standardId> — <description>"`.
    pub fn lesson_lines(&self) -> Vec<String> {
        self.standards.iter().map(ResolvedStandard::lesson_line).collect()
    }
}
