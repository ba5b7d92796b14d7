//! Resolved standard, the unit of resolution output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::StandardId;
use crate::types::{Grade, Subject};

/// Layer that ultimately produced a resolved entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedFrom {
    /// Built-in national or state baseline catalog.
    National,
    /// Persisted state override.
    State,
    /// District custom standard.
    District,
    /// Persisted school override.
    School,
}

impl ResolvedFrom {
    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedFrom::National => "national",
            ResolvedFrom::State => "state",
            ResolvedFrom::District => "district",
            ResolvedFrom::School => "school",
        }
    }
}

impl fmt::Display for ResolvedFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A standard after all layers have been merged.
///
/// `standard_id` is unique within one resolution result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStandard {
    /// Standard identifier.
    pub standard_id: StandardId,
    /// Label of the adopting framework (e.g. a state family name, or "District").
    pub framework: String,
    /// Subject of the resolution key.
    pub subject: Subject,
    /// Grade of the resolution key.
    pub grade: Grade,
    /// Human-readable standard text.
    pub description: String,
    /// Display name of the origin, for attribution.
    pub source: String,
    /// Layer that produced this entry.
    pub resolved_from: ResolvedFrom,
    /// True if this entry replaced a lower-layer entry.
    pub is_overridden: bool,
}

impl ResolvedStandard {
    /// Create a baseline entry (`national`, not overridden).
    pub fn baseline(
        standard_id: impl Into<StandardId>,
        framework: impl Into<String>,
        subject: Subject,
        grade: Grade,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            standard_id: standard_id.into(),
            framework: framework.into(),
            subject,
            grade,
            description: description.into(),
            source: source.into(),
            resolved_from: ResolvedFrom::National,
            is_overridden: false,
        }
    }

    /// Alias of `standard_id`, kept for callers that read `id`.
    pub fn id(&self) -> &StandardId {
        &self.standard_id
    }

    /// Lesson-plan projection: `"<standardId> — <description>"`.
    pub fn lesson_line(&self) -> String {
        format!("{} \u{2014} {}", self.standard_id, self.description)
    }
}
