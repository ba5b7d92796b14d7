//! Subject type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic subject.
///
/// The seven built-in subjects have hand-curated catalogs. Anything else is
/// carried as [`Subject::Other`] and resolves against the generic fallback
/// set. Parsing is case-sensitive: `"math"` is *not* [`Subject::Math`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Subject {
    /// Mathematics
    Math,
    /// English language arts and literacy
    LanguageArts,
    /// Science
    Science,
    /// Social studies
    SocialStudies,
    /// Physical education
    PhysicalEducation,
    /// Health education
    Health,
    /// Computer science
    ComputerScience,
    /// Any other subject, kept verbatim.
    Other(String),
}

impl Subject {
    /// All subjects with a built-in catalog.
    pub const BUILTIN: [Subject; 7] = [
        Subject::Math,
        Subject::LanguageArts,
        Subject::Science,
        Subject::SocialStudies,
        Subject::PhysicalEducation,
        Subject::Health,
        Subject::ComputerScience,
    ];

    /// Parse a subject name. Exact, case-sensitive match on display names.
    pub fn parse(name: &str) -> Self {
        match name {
            "Math" => Subject::Math,
            "Language Arts" => Subject::LanguageArts,
            "Science" => Subject::Science,
            "Social Studies" => Subject::SocialStudies,
            "Physical Education" => Subject::PhysicalEducation,
            "Health" => Subject::Health,
            "Computer Science" => Subject::ComputerScience,
            other => Subject::Other(other.to_string()),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Subject::Math => "Math",
            Subject::LanguageArts => "Language Arts",
            Subject::Science => "Science",
            Subject::SocialStudies => "Social Studies",
            Subject::PhysicalEducation => "Physical Education",
            Subject::Health => "Health",
            Subject::ComputerScience => "Computer Science",
            Subject::Other(name) => name,
        }
    }

    /// Code used as the subject segment of standard identifiers.
    ///
    /// Free-text subjects are upper-cased with runs of non-alphanumeric
    /// characters collapsed to a single `-`.
    pub fn code(&self) -> String {
        match self {
            Subject::Math => "MATH".into(),
            Subject::LanguageArts => "ELA".into(),
            Subject::Science => "SCI".into(),
            Subject::SocialStudies => "SS".into(),
            Subject::PhysicalEducation => "PE".into(),
            Subject::Health => "HE".into(),
            Subject::ComputerScience => "CS".into(),
            Subject::Other(name) => slug_code(name),
        }
    }

    /// Returns true for subjects with a built-in catalog.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Subject::Other(_))
    }
}

fn slug_code(name: &str) -> String {
    let mut code = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            code.push(c.to_ascii_uppercase());
        } else if !code.is_empty() && !code.ends_with('-') {
            code.push('-');
        }
    }
    while code.ends_with('-') {
        code.pop();
    }
    if code.is_empty() {
        "GEN".to_string()
    } else {
        code
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        match Subject::parse(&s) {
            Subject::Other(_) => Subject::Other(s),
            builtin => builtin,
        }
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Subject::parse(s)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Other(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}
