//! Layer merge steps.
//!
//! Each step mutates or appends to the accumulator produced by the previous
//! one. Replacements keep the entry's position; appends go to the end in
//! the order given. Order of application is fixed: baseline, state
//! overrides, district standards, school overrides.

use tracing::{debug, warn};

use curricula_core::{
    DistrictStandard, Jurisdiction, ResolvedFrom, ResolvedStandard, SchoolOverride, StandardId,
    StateOverride,
};

/// Framework label of district custom standards.
pub const DISTRICT_FRAMEWORK: &str = "District";

/// Source label of school overrides.
pub const SCHOOL_OVERRIDE_SOURCE: &str = "School Override";

/// Counters reported by a merge step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries replaced in place
    pub replaced: usize,
    /// Entries appended
    pub appended: usize,
    /// Records dropped because their target was absent
    pub dropped: usize,
}

fn position(acc: &[ResolvedStandard], id: &StandardId) -> Option<usize> {
    acc.iter().position(|s| &s.standard_id == id)
}

/// Step 2: merge the jurisdiction baseline over the national one.
///
/// Same `standard_id` replaces in place, anything else is appended.
pub fn merge_baseline(acc: &mut Vec<ResolvedStandard>, state: Vec<ResolvedStandard>) -> MergeStats {
    let mut stats = MergeStats::default();
    for standard in state {
        match position(acc, &standard.standard_id) {
            Some(i) => {
                acc[i] = standard;
                stats.replaced += 1;
            }
            None => {
                acc.push(standard);
                stats.appended += 1;
            }
        }
    }
    stats
}

/// Step 3: apply state overrides.
///
/// The target entry takes the new ID and description and is re-labelled as
/// coming from `jurisdiction`. Overrides whose target is absent are dropped.
/// An override whose new ID already belongs to a different entry is also
/// dropped so IDs stay unique.
pub fn apply_state_overrides(
    acc: &mut [ResolvedStandard],
    overrides: &[StateOverride],
    jurisdiction: &Jurisdiction,
) -> MergeStats {
    let mut stats = MergeStats::default();
    for o in overrides {
        let Some(i) = position(acc, &o.replaces_standard_id) else {
            debug!(
                target_id = %o.replaces_standard_id,
                record = %o.id,
                "state override target absent, dropped"
            );
            stats.dropped += 1;
            continue;
        };

        if o.new_standard_id != o.replaces_standard_id && position(acc, &o.new_standard_id).is_some() {
            warn!(
                new_id = %o.new_standard_id,
                record = %o.id,
                "state override would duplicate an existing standard id, dropped"
            );
            stats.dropped += 1;
            continue;
        }

        let entry = &mut acc[i];
        entry.standard_id = o.new_standard_id.clone();
        entry.description = o.description.clone();
        entry.framework = jurisdiction.code().to_string();
        entry.source = format!("State Override ({jurisdiction})");
        entry.resolved_from = ResolvedFrom::State;
        entry.is_overridden = true;
        stats.replaced += 1;
    }
    stats
}

/// Step 4: append district custom standards.
///
/// Every record is appended, except one whose ID already belongs to an entry
/// in the result. That record is dropped so IDs stay unique.
pub fn append_district_standards(
    acc: &mut Vec<ResolvedStandard>,
    records: &[DistrictStandard],
) -> MergeStats {
    let mut stats = MergeStats::default();
    for r in records {
        let standard_id = StandardId::new(r.id.as_str());
        if position(acc, &standard_id).is_some() {
            warn!(
                standard_id = %standard_id,
                district = %r.district_id,
                "district standard would duplicate an existing standard id, dropped"
            );
            stats.dropped += 1;
            continue;
        }

        acc.push(ResolvedStandard {
            standard_id,
            framework: DISTRICT_FRAMEWORK.to_string(),
            subject: r.subject.clone(),
            grade: r.grade,
            description: r.description.clone(),
            source: format!("District Custom ({})", r.district_id),
            resolved_from: ResolvedFrom::District,
            is_overridden: false,
        });
        stats.appended += 1;
    }
    stats
}

/// Step 5: apply school overrides.
///
/// Only the description changes; ID, framework, subject and grade are kept.
pub fn apply_school_overrides(acc: &mut [ResolvedStandard], overrides: &[SchoolOverride]) -> MergeStats {
    let mut stats = MergeStats::default();
    for o in overrides {
        match position(acc, &o.overrides_standard_id) {
            Some(i) => {
                let entry = &mut acc[i];
                entry.description = o.custom_description.clone();
                entry.source = SCHOOL_OVERRIDE_SOURCE.to_string();
                entry.resolved_from = ResolvedFrom::School;
                entry.is_overridden = true;
                stats.replaced += 1;
            }
            None => {
                debug!(
                    target_id = %o.overrides_standard_id,
                    record = %o.id,
                    "school override target absent, dropped"
                );
                stats.dropped += 1;
            }
        }
    }
    stats
}
