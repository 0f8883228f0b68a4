//! The named operations consumed by the request boundary.

use crate::error::{StoreError, StoreResult};
use crate::outcome::{Ack, Outcome, PositionState};
use crate::{PositionStore, RecordStore, TableRegistry};
use roster_db::{Database, DbConfig};
use roster_types::{NewRecord, Position, Record, RecordId, RecordPatch, TableName};

/// One entry point per boundary operation.
///
/// Holds no state of its own beyond the three components, all built from
/// the same [`Database`]. Table names arrive raw: `create_table` rejects a
/// malformed one as `InvalidName`, every other operation treats it as a
/// table that does not exist. No storage access happens for malformed names.
#[derive(Debug, Clone)]
pub struct Roster {
    registry: TableRegistry,
    records: RecordStore,
    positions: PositionStore,
}

impl Roster {
    /// Builds the registry and both stores on one database handle.
    pub fn new(db: Database) -> Self {
        Self {
            registry: TableRegistry::new(db.clone()),
            records: RecordStore::new(db.clone()),
            positions: PositionStore::new(db),
        }
    }

    /// Opens the database described by `config` and builds a facade on it.
    pub fn open(config: &DbConfig) -> StoreResult<Self> {
        Ok(Self::new(Database::open(config)?))
    }

    /// In-memory facade (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(&DbConfig::in_memory())
    }

    /// The table registry behind this facade.
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    /// The record store behind this facade.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// The position store behind this facade.
    pub fn positions(&self) -> &PositionStore {
        &self.positions
    }

    // ── Tables ───────────────────────────────────────────────────

    pub fn create_table(&self, name: &str) -> Outcome<Ack> {
        let table = TableName::parse(name).map_err(StoreError::from)?;
        self.registry.create(&table)?;
        Ok(Ack::new(format!("Table '{table}' created successfully.")))
    }

    pub fn delete_table(&self, name: &str) -> Outcome<Ack> {
        let table = existing(name)?;
        self.registry.delete(&table)?;
        Ok(Ack::new(format!("Table '{table}' deleted successfully.")))
    }

    pub fn table_exists(&self, name: &str) -> Outcome<bool> {
        match TableName::parse(name) {
            Ok(table) => Ok(self.registry.exists(&table)?),
            Err(_) => Ok(false),
        }
    }

    pub fn list_tables(&self) -> Outcome<Vec<String>> {
        let tables = self.registry.list()?;
        Ok(tables.into_iter().map(TableName::into_string).collect())
    }

    // ── Position ─────────────────────────────────────────────────

    pub fn set_position(&self, name: &str, x: f64, y: f64) -> Outcome<Ack> {
        let table = existing(name)?;
        self.positions.set(&table, Position::new(x, y))?;
        Ok(Ack::new("Position updated"))
    }

    pub fn get_position(&self, name: &str) -> Outcome<PositionState> {
        let table = existing(name)?;
        Ok(self.positions.get(&table)?.into())
    }

    // ── Records ──────────────────────────────────────────────────

    pub fn insert_record(&self, name: &str, record_name: &str, level: i64) -> Outcome<RecordId> {
        let table = existing(name)?;
        Ok(self
            .records
            .insert(&table, &NewRecord::new(record_name, level))?)
    }

    pub fn list_records(&self, name: &str) -> Outcome<Vec<Record>> {
        let table = existing(name)?;
        Ok(self.records.list(&table)?)
    }

    pub fn get_record(&self, name: &str, id: RecordId) -> Outcome<Record> {
        let table = existing(name)?;
        Ok(self.records.get(&table, id)?)
    }

    pub fn find_records(&self, name: &str, query_name: &str) -> Outcome<Vec<Record>> {
        let table = existing(name)?;
        Ok(self.records.find_by_name(&table, query_name)?)
    }

    pub fn update_record(&self, name: &str, id: RecordId, patch: &RecordPatch) -> Outcome<Ack> {
        let table = existing(name)?;
        self.records.update(&table, id, patch)?;
        Ok(Ack::new("Record updated."))
    }

    pub fn delete_record(&self, name: &str, id: RecordId) -> Outcome<Ack> {
        let table = existing(name)?;
        self.records.delete(&table, id)?;
        Ok(Ack::new("Record deleted."))
    }

    pub fn count_records(&self, name: &str) -> Outcome<u64> {
        let table = existing(name)?;
        Ok(self.records.count(&table)?)
    }
}

/// A malformed name can never be registered, so it resolves to
/// `TableNotFound` for every operation except create.
fn existing(name: &str) -> Result<TableName, StoreError> {
    TableName::parse(name).map_err(|_| StoreError::TableNotFound(name.to_string()))
}
