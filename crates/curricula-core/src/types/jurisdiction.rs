//! Jurisdiction codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Jurisdiction code (e.g. `"CA"`, `"TX"`), normalized to upper case.
///
/// [`Jurisdiction::national`] is the generic default and means
/// "national baseline only".
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Jurisdiction(String);

impl Jurisdiction {
    /// Code of the default, national jurisdiction.
    pub const NATIONAL_CODE: &'static str = "US";

    /// Create a jurisdiction from a code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// The national default jurisdiction.
    pub fn national() -> Self {
        Self(Self::NATIONAL_CODE.to_string())
    }

    /// Get the code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self::national()
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Jurisdiction {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Jurisdiction {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Jurisdiction> for String {
    fn from(j: Jurisdiction) -> Self {
        j.0
    }
}
