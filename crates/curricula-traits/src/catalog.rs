//! Baseline catalog trait.

use curricula_core::{Grade, Jurisdiction, ResolvedStandard, Subject};

/// Supplies the immutable baseline standards for a `(subject, grade, jurisdiction)` key.
///
/// Implementations are pure and synchronous: no I/O and no error cases.
/// Unknown subjects or jurisdictions degrade to a fallback set, so the
/// result is never empty. Every entry is tagged `national` and not
/// overridden.
pub trait CatalogProvider: Send + Sync {
    /// Baseline standards for the key.
    fn base_standards(
        &self,
        subject: &Subject,
        grade: Grade,
        jurisdiction: &Jurisdiction,
    ) -> Vec<ResolvedStandard>;
}
