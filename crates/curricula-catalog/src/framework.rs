//! Framework mapping.
//!
//! Maps a jurisdiction and subject to the standards family that jurisdiction
//! adopted. The framework only selects the identifier prefix, label and
//! source name fed into the catalog; it performs no merging.

use serde::Serialize;

use curricula_core::{Jurisdiction, Subject};

/// A named standards framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Framework {
    /// Short label carried on each resolved standard.
    pub name: &'static str,
    /// Identifier prefix (first segment(s) of a standard ID).
    pub prefix: &'static str,
    /// Display name of the publishing body, used as the standard's source.
    pub source: &'static str,
}

impl Framework {
    const fn new(name: &'static str, prefix: &'static str, source: &'static str) -> Self {
        Self { name, prefix, source }
    }
}

// =============================================================================
// NATIONAL FRAMEWORKS
// =============================================================================

/// Generic common framework. Also the fallback for unmapped subjects.
pub const COMMON_CORE: Framework =
    Framework::new("Common Core", "CCSS", "Common Core State Standards");
/// Next Generation Science Standards.
pub const NGSS: Framework = Framework::new("NGSS", "NGSS", "Next Generation Science Standards");
/// College, Career, and Civic Life framework for social studies.
pub const C3: Framework = Framework::new("C3 Framework", "C3", "C3 Framework for Social Studies");
/// National physical education standards.
pub const SHAPE: Framework =
    Framework::new("SHAPE America", "SHAPE", "SHAPE America National PE Standards");
/// National Health Education Standards.
pub const NHES: Framework = Framework::new("NHES", "NHES", "National Health Education Standards");
/// CSTA computer science standards.
pub const CSTA: Framework = Framework::new("CSTA", "CSTA", "CSTA K-12 Computer Science Standards");

// =============================================================================
// STATE FRAMEWORKS
// =============================================================================

const CA_CCSS: Framework =
    Framework::new("CA Common Core", "CCSS", "California Common Core State Standards");
const CA_NGSS: Framework = Framework::new("CA NGSS", "NGSS", "California Next Generation Science Standards");
const CA_HSS: Framework =
    Framework::new("CA HSS", "CA.HSS", "California History-Social Science Standards");

const TEKS: Framework = Framework::new("TEKS", "TEKS", "Texas Essential Knowledge and Skills");

const FL_BEST: Framework = Framework::new("B.E.S.T.", "FL.BEST", "Florida B.E.S.T. Standards");
const FL_NGSSS: Framework =
    Framework::new("NGSSS", "FL.NGSSS", "Florida Next Generation Sunshine State Standards");

const VA_SOL: Framework = Framework::new("SOL", "VA.SOL", "Virginia Standards of Learning");

const NY_NGLS: Framework =
    Framework::new("NYS NGLS", "NY.NG", "New York State Next Generation Learning Standards");
const NY_SLS: Framework =
    Framework::new("NYSSLS", "NY.SLS", "New York State P-12 Science Learning Standards");

const MA_CF: Framework =
    Framework::new("MA Frameworks", "MA.CF", "Massachusetts Curriculum Frameworks");
const MA_STE: Framework =
    Framework::new("MA STE", "MA.STE", "Massachusetts Science and Technology/Engineering Framework");

/// National framework for a subject.
pub fn national_framework(subject: &Subject) -> Framework {
    match subject {
        Subject::Math | Subject::LanguageArts => COMMON_CORE,
        Subject::Science => NGSS,
        Subject::SocialStudies => C3,
        Subject::PhysicalEducation => SHAPE,
        Subject::Health => NHES,
        Subject::ComputerScience => CSTA,
        Subject::Other(_) => COMMON_CORE,
    }
}

/// State-adopted framework, if the state maps the subject.
fn state_framework(code: &str, subject: &Subject) -> Option<Framework> {
    use Subject::*;

    let framework = match (code, subject) {
        ("CA", Math | LanguageArts) => CA_CCSS,
        ("CA", Science) => CA_NGSS,
        ("CA", SocialStudies) => CA_HSS,

        ("TX", Other(_)) => return None,
        ("TX", _) => TEKS,

        ("FL", Math | LanguageArts) => FL_BEST,
        ("FL", Science | SocialStudies) => FL_NGSSS,

        ("VA", Math | LanguageArts | Science | SocialStudies) => VA_SOL,

        ("NY", Math | LanguageArts) => NY_NGLS,
        ("NY", Science) => NY_SLS,

        ("MA", Math | LanguageArts | SocialStudies) => MA_CF,
        ("MA", Science | ComputerScience) => MA_STE,

        _ => return None,
    };
    Some(framework)
}

/// Jurisdictions with their own framework table.
pub const RECOGNIZED_JURISDICTIONS: [&str; 6] = ["CA", "TX", "FL", "VA", "NY", "MA"];

/// Maps `(jurisdiction, subject)` to a [`Framework`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameworkMapper;

impl FrameworkMapper {
    /// Create a mapper over the built-in tables.
    pub fn new() -> Self {
        Self
    }

    /// Framework adopted by `jurisdiction` for `subject`.
    ///
    /// Falls back to the national framework when the jurisdiction is
    /// unrecognized or does not map the subject, and to [`COMMON_CORE`] for
    /// subjects without a national framework.
    pub fn framework_for(&self, jurisdiction: &Jurisdiction, subject: &Subject) -> Framework {
        state_framework(jurisdiction.code(), subject).unwrap_or_else(|| national_framework(subject))
    }

    /// Returns true if the jurisdiction has its own table.
    pub fn is_recognized(&self, jurisdiction: &Jurisdiction) -> bool {
        RECOGNIZED_JURISDICTIONS.contains(&jurisdiction.code())
    }
}
