//! File-based seed data.
//!
//! Two formats are supported:
//! - JSON: `{ "state_overrides": [..], "district_standards": [..], "school_overrides": [..] }`,
//!   every key optional
//! - CSV: district standards with header `district_id,subject,grade,description`
//!   and an optional `id` column
//!
//! Records without an `id` get one derived from their position and content,
//! so loading the same file again overwrites instead of duplicating. Records
//! without a `created_at` are stamped in file order so query order matches
//! the file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use curricula_core::{
    DistrictId, DistrictStandard, Grade, Persisted, RecordId, SchoolOverride, StateOverride,
    Subject, Validate,
};
use curricula_traits::error::TraitError;
use curricula_traits::StorageAdapter;

/// Override and custom-standard records to preload into a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    /// State overrides
    #[serde(default)]
    pub state_overrides: Vec<StateOverride>,
    /// District custom standards
    #[serde(default)]
    pub district_standards: Vec<DistrictStandard>,
    /// School overrides
    #[serde(default)]
    pub school_overrides: Vec<SchoolOverride>,
}

/// Counts of records written by [`SeedData::load_into`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// State overrides written
    pub state_overrides: usize,
    /// District standards written
    pub district_standards: usize,
    /// School overrides written
    pub school_overrides: usize,
}

impl SeedSummary {
    /// Total records written.
    pub fn total(&self) -> usize {
        self.state_overrides + self.district_standards + self.school_overrides
    }
}

#[derive(Debug, Deserialize)]
struct DistrictRecord {
    #[serde(default)]
    id: Option<String>,
    district_id: String,
    subject: String,
    grade: u32,
    description: String,
}

impl SeedData {
    /// Parse seed data from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, TraitError> {
        let mut seed: SeedData =
            serde_json::from_str(content).map_err(|e| TraitError::ParseError(e.to_string()))?;
        seed.fill_defaults(now_millis());
        Ok(seed)
    }

    /// Load seed data from a JSON file. A missing file yields empty seed data.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| TraitError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Append district standards read from a CSV file. A missing file adds nothing.
    pub fn with_district_csv(mut self, path: impl AsRef<Path>) -> Result<Self, TraitError> {
        self.district_standards
            .extend(read_district_csv(path.as_ref())?);
        Ok(self)
    }

    /// Check if there is nothing to load.
    pub fn is_empty(&self) -> bool {
        self.state_overrides.is_empty()
            && self.district_standards.is_empty()
            && self.school_overrides.is_empty()
    }

    /// Validate every record, then write them all into `storage`.
    ///
    /// Nothing is written if any record is invalid or two records of the same
    /// kind share an ID.
    pub async fn load_into(&self, storage: &StorageAdapter) -> Result<SeedSummary, TraitError> {
        check_all("state override", &self.state_overrides)?;
        check_all("district standard", &self.district_standards)?;
        check_all("school override", &self.school_overrides)?;

        for record in &self.state_overrides {
            storage.state_overrides.insert(record).await?;
        }
        for record in &self.district_standards {
            storage.district_standards.insert(record).await?;
        }
        for record in &self.school_overrides {
            storage.school_overrides.insert(record).await?;
        }

        let summary = SeedSummary {
            state_overrides: self.state_overrides.len(),
            district_standards: self.district_standards.len(),
            school_overrides: self.school_overrides.len(),
        };
        info!(
            state_overrides = summary.state_overrides,
            district_standards = summary.district_standards,
            school_overrides = summary.school_overrides,
            "seed data loaded"
        );
        Ok(summary)
    }

    /// Fill in IDs and `created_at` for records that omitted them.
    fn fill_defaults(&mut self, base: i64) {
        let mut next = base;
        let mut tick = |created_at: &mut i64| {
            if *created_at == 0 {
                *created_at = next;
                next += 1;
            }
        };

        for (index, r) in self.state_overrides.iter_mut().enumerate() {
            if r.id.is_blank() {
                r.id = seed_id(
                    "state_override",
                    index,
                    &[
                        r.state.code(),
                        r.subject.name(),
                        r.replaces_standard_id.as_str(),
                        r.new_standard_id.as_str(),
                        r.description.as_str(),
                    ],
                );
            }
            tick(&mut r.created_at);
        }
        for (index, r) in self.district_standards.iter_mut().enumerate() {
            if r.id.is_blank() {
                r.id = seed_id(
                    "district_standard",
                    index,
                    &[
                        r.district_id.as_str(),
                        r.subject.name(),
                        r.grade.to_string().as_str(),
                        r.description.as_str(),
                    ],
                );
            }
            tick(&mut r.created_at);
        }
        for (index, r) in self.school_overrides.iter_mut().enumerate() {
            if r.id.is_blank() {
                r.id = seed_id(
                    "school_override",
                    index,
                    &[
                        r.school_id.as_str(),
                        r.overrides_standard_id.as_str(),
                        r.custom_description.as_str(),
                    ],
                );
            }
            tick(&mut r.created_at);
        }
    }
}

fn seed_id(source: &str, index: usize, fields: &[&str]) -> RecordId {
    RecordId::derive(&format!("{source}:{index}:{}", fields.join("\u{1f}")))
}

/// Read district standards from a CSV file.
fn read_district_csv(path: &Path) -> Result<Vec<DistrictStandard>, TraitError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader =
        csv::Reader::from_path(path).map_err(|e| TraitError::IoError(e.to_string()))?;

    let base = now_millis();
    let mut records = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: DistrictRecord = result.map_err(|e| TraitError::ParseError(e.to_string()))?;

        let id = match record.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => RecordId::new(id),
            None => seed_id(
                "district_csv",
                row,
                &[
                    record.district_id.as_str(),
                    record.subject.as_str(),
                    record.grade.to_string().as_str(),
                    record.description.as_str(),
                ],
            ),
        };

        records.push(DistrictStandard {
            id,
            district_id: DistrictId::new(record.district_id),
            subject: Subject::parse(&record.subject),
            grade: Grade::new(record.grade),
            description: record.description,
            created_at: base + row as i64,
        });
    }

    Ok(records)
}

fn check_all<T: Validate + Persisted>(kind: &str, records: &[T]) -> Result<(), TraitError> {
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        let errors = record.validate();
        if !errors.is_empty() {
            let detail: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(TraitError::InvalidInput(format!(
                "{kind} #{index}: {}",
                detail.join("; ")
            )));
        }
        if !seen.insert(record.id().as_str()) {
            return Err(TraitError::AlreadyExists(format!(
                "{kind} #{index}: id {}",
                record.id()
            )));
        }
    }
    Ok(())
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_keys_are_optional() {
        let seed = SeedData::from_json_str("{}").unwrap();
        assert!(seed.is_empty());
    }

    #[test]
    fn test_json_fills_ids_and_file_order() {
        let seed = SeedData::from_json_str(
            r#"{
                "district_standards": [
                    {"district_id": "d1", "subject": "Math", "grade": 4, "description": "first"},
                    {"district_id": "d1", "subject": "Math", "grade": 4, "description": "second"}
                ]
            }"#,
        )
        .unwrap();

        let [first, second] = &seed.district_standards[..] else {
            panic!("expected two records");
        };
        assert!(!first.id.is_blank());
        assert_ne!(first.id, second.id);
        assert!(first.created_at < second.created_at);
    }

    #[test]
    fn test_missing_ids_are_stable_across_loads() {
        let json = r#"{
            "district_standards": [
                {"district_id": "d1", "subject": "Math", "grade": 4, "description": "first"}
            ],
            "school_overrides": [
                {"school_id": "s1", "overrides_standard_id": "CCSS.MATH.4.OA.1", "custom_description": "x"}
            ]
        }"#;
        let a = SeedData::from_json_str(json).unwrap();
        let b = SeedData::from_json_str(json).unwrap();
        assert_eq!(a.district_standards[0].id, b.district_standards[0].id);
        assert_eq!(a.school_overrides[0].id, b.school_overrides[0].id);
    }

    #[test]
    fn test_csv_rows_without_id_are_stable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "district_id,subject,grade,description").unwrap();
        writeln!(file, "d1,Math,4,Same text").unwrap();
        writeln!(file, "d1,Math,4,Same text").unwrap();

        let a = SeedData::default().with_district_csv(file.path()).unwrap();
        let b = SeedData::default().with_district_csv(file.path()).unwrap();
        let ids = |seed: &SeedData| -> Vec<RecordId> {
            seed.district_standards.iter().map(|r| r.id.clone()).collect()
        };
        assert_eq!(ids(&a), ids(&b));
        // Identical rows are still distinct records.
        assert_ne!(a.district_standards[0].id, a.district_standards[1].id);
    }

    #[test]
    fn test_json_malformed_is_parse_error() {
        let err = SeedData::from_json_str("{\"state_overrides\": 3}").unwrap_err();
        assert!(matches!(err, TraitError::ParseError(_)));
    }

    #[test]
    fn test_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let seed = SeedData::from_json_file(dir.path().join("missing.json"))
            .unwrap()
            .with_district_csv(dir.path().join("missing.csv"))
            .unwrap();
        assert!(seed.is_empty());
    }

    #[test]
    fn test_district_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "district_id,subject,grade,description").unwrap();
        writeln!(file, "d1,Math,4,Financial literacy: budgeting basics").unwrap();
        writeln!(file, "d1,Robotics,0,\"Build, test, repeat\"").unwrap();

        let seed = SeedData::default().with_district_csv(file.path()).unwrap();
        assert_eq!(seed.district_standards.len(), 2);

        let robotics = &seed.district_standards[1];
        assert_eq!(robotics.subject, Subject::Other("Robotics".into()));
        assert_eq!(robotics.grade, Grade::KINDERGARTEN);
        assert_eq!(robotics.description, "Build, test, repeat");
    }

    #[test]
    fn test_district_csv_bad_grade() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "district_id,subject,grade,description").unwrap();
        writeln!(file, "d1,Math,four,text").unwrap();

        let err = SeedData::default().with_district_csv(file.path()).unwrap_err();
        assert!(matches!(err, TraitError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_invalid_record_blocks_load() {
        let store = std::sync::Arc::new(crate::InMemoryStandardsStore::new());
        let storage = StorageAdapter::from_shared(store.clone());
        let seed = SeedData::from_json_str(
            r#"{
                "district_standards": [
                    {"district_id": "d1", "subject": "Math", "grade": 4, "description": "ok"},
                    {"district_id": "d1", "subject": "Math", "grade": 4, "description": "  "}
                ]
            }"#,
        )
        .unwrap();

        let err = seed.load_into(&storage).await.unwrap_err();
        assert!(err.to_string().contains("description"));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_block_load() {
        let store = std::sync::Arc::new(crate::InMemoryStandardsStore::new());
        let storage = StorageAdapter::from_shared(store.clone());
        let seed = SeedData::from_json_str(
            r#"{
                "district_standards": [
                    {"id": "x", "district_id": "d1", "subject": "Math", "grade": 4, "description": "a"},
                    {"id": "x", "district_id": "d1", "subject": "Math", "grade": 4, "description": "b"}
                ]
            }"#,
        )
        .unwrap();

        let err = seed.load_into(&storage).await.unwrap_err();
        assert!(matches!(err, TraitError::AlreadyExists(_)));
        assert!(store.is_empty());
    }
}
