//! # Curricula Ext Redb
//!
//! Embedded override store using redb for the Curricula engine.
//!
//! This crate provides durable storage for:
//! - State overrides
//! - District custom standards
//! - School overrides
//!
//! Each collection is one table keyed by record ID with JSON values. Queries
//! scan the table and filter; collections are small enough per deployment
//! that no secondary index is kept.
//!
//! Transactions run on tokio's blocking pool, so a caller's timeout still
//! fires while redb is busy.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;

use curricula_core::{
    sort_in_query_order, DistrictId, DistrictStandard, Grade, Jurisdiction, Persisted, RecordId,
    SchoolId, SchoolOverride, StateOverride, Subject,
};
use curricula_traits::error::TraitError;
use curricula_traits::storage::{
    DistrictStandardStore, SchoolOverrideStore, StateOverrideStore, StorageAdapter,
};

type Table = TableDefinition<'static, &'static str, &'static [u8]>;

// Table definitions
const STATE_OVERRIDES: Table = TableDefinition::new("state_overrides");
const DISTRICT_STANDARDS: Table = TableDefinition::new("district_standards");
const SCHOOL_OVERRIDES: Table = TableDefinition::new("school_overrides");

fn db_err(e: impl std::fmt::Display) -> TraitError {
    TraitError::DatabaseError(e.to_string())
}

/// Run `op` against the database on the blocking pool.
async fn blocking<R, F>(db: &Arc<Database>, op: F) -> Result<R, TraitError>
where
    F: FnOnce(&Database) -> Result<R, TraitError> + Send + 'static,
    R: Send + 'static,
{
    let db = Arc::clone(db);
    tokio::task::spawn_blocking(move || op(&db))
        .await
        .map_err(|e| TraitError::Internal(e.to_string()))?
}

// =============================================================================
// TABLE HELPERS
// =============================================================================

/// Read every record in `table` that passes `keep`, in query order.
fn scan<T>(db: &Database, table: Table, keep: impl Fn(&T) -> bool) -> Result<Vec<T>, TraitError>
where
    T: DeserializeOwned + Persisted,
{
    let read_txn = db.begin_read().map_err(db_err)?;

    let table = match read_txn.open_table(table) {
        Ok(t) => t,
        Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
        Err(e) => return Err(db_err(e)),
    };

    let mut records = Vec::new();
    for result in table.iter().map_err(db_err)? {
        let (_, value) = result.map_err(db_err)?;
        let record: T = serde_json::from_slice(value.value())
            .map_err(|e| TraitError::ParseError(e.to_string()))?;
        if keep(&record) {
            records.push(record);
        }
    }

    sort_in_query_order(&mut records);
    Ok(records)
}

fn put<T>(db: &Database, table: Table, record: &T) -> Result<(), TraitError>
where
    T: Serialize + Persisted,
{
    let bytes =
        serde_json::to_vec(record).map_err(|e| TraitError::SerializationError(e.to_string()))?;

    let write_txn = db.begin_write().map_err(db_err)?;
    {
        let mut table = write_txn.open_table(table).map_err(db_err)?;
        table
            .insert(record.id().as_str(), bytes.as_slice())
            .map_err(db_err)?;
    }
    write_txn.commit().map_err(db_err)?;
    Ok(())
}

fn remove(db: &Database, table: Table, id: &RecordId) -> Result<bool, TraitError> {
    let write_txn = db.begin_write().map_err(db_err)?;
    let deleted = {
        let mut table = write_txn.open_table(table).map_err(db_err)?;
        let result = table.remove(id.as_str()).map_err(db_err)?;
        result.is_some()
    };
    write_txn.commit().map_err(db_err)?;
    Ok(deleted)
}

// =============================================================================
// STATE OVERRIDES
// =============================================================================

/// Redb-based state override store.
pub struct RedbStateOverrideStore {
    db: Arc<Database>,
}

impl RedbStateOverrideStore {
    /// Create a new redb state override store.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StateOverrideStore for RedbStateOverrideStore {
    async fn query(
        &self,
        state: &Jurisdiction,
        subject: &Subject,
    ) -> Result<Vec<StateOverride>, TraitError> {
        let (state, subject) = (state.clone(), subject.clone());
        blocking(&self.db, move |db| {
            scan(db, STATE_OVERRIDES, |o: &StateOverride| {
                o.state == state && o.subject == subject
            })
        })
        .await
    }

    async fn insert(&self, record: &StateOverride) -> Result<(), TraitError> {
        let record = record.clone();
        blocking(&self.db, move |db| put(db, STATE_OVERRIDES, &record)).await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError> {
        let id = id.clone();
        blocking(&self.db, move |db| remove(db, STATE_OVERRIDES, &id)).await
    }
}

// =============================================================================
// DISTRICT STANDARDS
// =============================================================================

/// Redb-based district custom standard store.
pub struct RedbDistrictStandardStore {
    db: Arc<Database>,
}

impl RedbDistrictStandardStore {
    /// Create a new redb district standard store.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DistrictStandardStore for RedbDistrictStandardStore {
    async fn query(
        &self,
        district_id: &DistrictId,
        subject: &Subject,
        grade: Grade,
    ) -> Result<Vec<DistrictStandard>, TraitError> {
        let (district_id, subject) = (district_id.clone(), subject.clone());
        blocking(&self.db, move |db| {
            scan(db, DISTRICT_STANDARDS, |d: &DistrictStandard| {
                d.district_id == district_id && d.subject == subject && d.grade == grade
            })
        })
        .await
    }

    async fn insert(&self, record: &DistrictStandard) -> Result<(), TraitError> {
        let record = record.clone();
        blocking(&self.db, move |db| put(db, DISTRICT_STANDARDS, &record)).await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError> {
        let id = id.clone();
        blocking(&self.db, move |db| remove(db, DISTRICT_STANDARDS, &id)).await
    }
}

// =============================================================================
// SCHOOL OVERRIDES
// =============================================================================

/// Redb-based school override store.
pub struct RedbSchoolOverrideStore {
    db: Arc<Database>,
}

impl RedbSchoolOverrideStore {
    /// Create a new redb school override store.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchoolOverrideStore for RedbSchoolOverrideStore {
    async fn query(&self, school_id: &SchoolId) -> Result<Vec<SchoolOverride>, TraitError> {
        let school_id = school_id.clone();
        blocking(&self.db, move |db| {
            scan(db, SCHOOL_OVERRIDES, |o: &SchoolOverride| o.school_id == school_id)
        })
        .await
    }

    async fn insert(&self, record: &SchoolOverride) -> Result<(), TraitError> {
        let record = record.clone();
        blocking(&self.db, move |db| put(db, SCHOOL_OVERRIDES, &record)).await
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, TraitError> {
        let id = id.clone();
        blocking(&self.db, move |db| remove(db, SCHOOL_OVERRIDES, &id)).await
    }
}

/// Create a full storage adapter with redb backend.
///
/// Creates the database file if it does not exist.
pub fn create_redb_storage(path: impl AsRef<Path>) -> Result<StorageAdapter, TraitError> {
    let db = Arc::new(Database::create(path).map_err(db_err)?);

    Ok(StorageAdapter {
        state_overrides: Arc::new(RedbStateOverrideStore::new(db.clone())),
        district_standards: Arc::new(RedbDistrictStandardStore::new(db.clone())),
        school_overrides: Arc::new(RedbSchoolOverrideStore::new(db)),
    })
}
