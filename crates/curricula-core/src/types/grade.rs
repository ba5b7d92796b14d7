//! Grade level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade level. `0` is kindergarten.
///
/// No upper bound is enforced; callers are responsible for passing sane
/// grade levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(pub u32);

impl Grade {
    /// Kindergarten.
    pub const KINDERGARTEN: Grade = Grade(0);

    /// Create a grade.
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Numeric level.
    pub const fn level(self) -> u32 {
        self.0
    }

    /// Short label: `K` for kindergarten, otherwise the number.
    pub fn label(self) -> String {
        match self.0 {
            0 => "K".to_string(),
            n => n.to_string(),
        }
    }

    /// Long label used in standard descriptions.
    pub fn long_label(self) -> String {
        match self.0 {
            0 => "Kindergarten".to_string(),
            n => format!("Grade {n}"),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Grade {
    fn from(level: u32) -> Self {
        Self(level)
    }
}
