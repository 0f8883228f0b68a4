//! Row-level CRUD inside a registered table.

use crate::error::{StoreError, StoreResult};
use crate::registry::require;
use roster_db::Database;
use roster_types::{NewRecord, Record, RecordId, RecordPatch, TableName};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

/// Stores records for every table. Each table has its own id sequence,
/// kept with its registry entry, so ids are never reused even after the
/// highest record is deleted.
#[derive(Debug, Clone)]
pub struct RecordStore {
    db: Database,
}

impl RecordStore {
    /// Creates a record store on the shared database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Appends a record and returns its newly assigned id.
    pub fn insert(&self, table: &TableName, record: &NewRecord) -> StoreResult<RecordId> {
        let id = self.db.write(|tx| {
            let bumped = tx.execute(
                "UPDATE roster_tables SET last_id = last_id + 1 WHERE name = ?1",
                params![table.as_str()],
            )?;
            if bumped == 0 {
                return Err(StoreError::table_not_found(table));
            }
            let id: i64 = tx.query_row(
                "SELECT last_id FROM roster_tables WHERE name = ?1",
                params![table.as_str()],
                |row| row.get(0),
            )?;
            tx.execute(
                "INSERT INTO roster_records (table_name, id, name, level) VALUES (?1, ?2, ?3, ?4)",
                params![table.as_str(), id, record.name, record.level],
            )?;
            Ok(RecordId::new(id))
        })?;
        debug!(table = %table, id = %id, "Record inserted");
        Ok(id)
    }

    /// All records, ascending by id.
    pub fn list(&self, table: &TableName) -> StoreResult<Vec<Record>> {
        self.db.read(|tx| {
            require(tx, table)?;
            let mut stmt = tx.prepare(
                "SELECT id, name, level FROM roster_records WHERE table_name = ?1 ORDER BY id",
            )?;
            let records = stmt
                .query_map(params![table.as_str()], record_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        })
    }

    pub fn get(&self, table: &TableName, id: RecordId) -> StoreResult<Record> {
        self.db.read(|tx| {
            require(tx, table)?;
            fetch(tx, table, id)?.ok_or_else(|| StoreError::RecordNotFound {
                table: table.clone(),
                id,
            })
        })
    }

    /// Records whose name equals `name` exactly (case-sensitive), ascending
    /// by id. No match is an empty list, not an error.
    pub fn find_by_name(&self, table: &TableName, name: &str) -> StoreResult<Vec<Record>> {
        self.db.read(|tx| {
            require(tx, table)?;
            let mut stmt = tx.prepare(
                "SELECT id, name, level FROM roster_records \
                 WHERE table_name = ?1 AND name = ?2 ORDER BY id",
            )?;
            let records = stmt
                .query_map(params![table.as_str(), name], record_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        })
    }

    /// Overwrites the fields the patch specifies. An empty patch only
    /// checks that the record exists.
    pub fn update(&self, table: &TableName, id: RecordId, patch: &RecordPatch) -> StoreResult<()> {
        self.db.write::<_, StoreError>(|tx| {
            require(tx, table)?;
            let mut record = fetch(tx, table, id)?.ok_or_else(|| StoreError::RecordNotFound {
                table: table.clone(),
                id,
            })?;
            if patch.is_empty() {
                return Ok(());
            }
            patch.apply_to(&mut record);
            tx.execute(
                "UPDATE roster_records SET name = ?3, level = ?4 WHERE table_name = ?1 AND id = ?2",
                params![table.as_str(), id.get(), record.name, record.level],
            )?;
            Ok(())
        })?;
        debug!(table = %table, id = %id, "Record updated");
        Ok(())
    }

    /// Removes a record. Remaining ids are left untouched.
    pub fn delete(&self, table: &TableName, id: RecordId) -> StoreResult<()> {
        self.db.write(|tx| {
            require(tx, table)?;
            let removed = tx.execute(
                "DELETE FROM roster_records WHERE table_name = ?1 AND id = ?2",
                params![table.as_str(), id.get()],
            )?;
            if removed == 0 {
                return Err(StoreError::RecordNotFound {
                    table: table.clone(),
                    id,
                });
            }
            Ok(())
        })?;
        debug!(table = %table, id = %id, "Record deleted");
        Ok(())
    }

    pub fn count(&self, table: &TableName) -> StoreResult<u64> {
        self.db.read(|tx| {
            require(tx, table)?;
            let count: i64 = tx.query_row(
                "SELECT COUNT(*) FROM roster_records WHERE table_name = ?1",
                params![table.as_str()],
                |row| row.get(0),
            )?;
            Ok(count.unsigned_abs())
        })
    }
}

fn fetch(conn: &Connection, table: &TableName, id: RecordId) -> StoreResult<Option<Record>> {
    let record = conn
        .query_row(
            "SELECT id, name, level FROM roster_records WHERE table_name = ?1 AND id = ?2",
            params![table.as_str(), id.get()],
            record_from_row,
        )
        .optional()?;
    Ok(record)
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: RecordId::new(row.get(0)?),
        name: row.get(1)?,
        level: row.get(2)?,
    })
}
