//! Registry of existing tables.

use crate::error::{StoreError, StoreResult};
use roster_db::Database;
use roster_types::TableName;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

/// Tracks which tables exist. Creating a table allocates its record id
/// counter and position slot; deleting it drops both along with every
/// record it owns.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    db: Database,
}

impl TableRegistry {
    /// Creates a registry on the shared database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Registers an empty table.
    pub fn create(&self, name: &TableName) -> StoreResult<()> {
        self.db.write(|tx| {
            let inserted = tx.execute(
                "INSERT OR IGNORE INTO roster_tables (name, last_id) VALUES (?1, 0)",
                params![name.as_str()],
            )?;
            if inserted == 0 {
                return Err(StoreError::AlreadyExists(name.clone()));
            }
            Ok(())
        })?;
        info!(table = %name, "Table created");
        Ok(())
    }

    /// Removes a table with all of its records and its position.
    pub fn delete(&self, name: &TableName) -> StoreResult<()> {
        self.db.write(|tx| {
            let removed = tx.execute(
                "DELETE FROM roster_tables WHERE name = ?1",
                params![name.as_str()],
            )?;
            if removed == 0 {
                return Err(StoreError::table_not_found(name));
            }
            Ok(())
        })?;
        info!(table = %name, "Table deleted");
        Ok(())
    }

    pub fn exists(&self, name: &TableName) -> StoreResult<bool> {
        self.db.read(|tx| is_registered(tx, name))
    }

    /// All registered tables, ordered by name.
    pub fn list(&self) -> StoreResult<Vec<TableName>> {
        self.db.read(|tx| {
            let mut stmt = tx.prepare("SELECT name FROM roster_tables ORDER BY name")?;
            let names = stmt
                .query_map([], |row| {
                    let raw: String = row.get(0)?;
                    TableName::parse(&raw).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(names)
        })
    }
}

fn is_registered(conn: &Connection, name: &TableName) -> StoreResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM roster_tables WHERE name = ?1",
            params![name.as_str()],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Fails with `TableNotFound` unless `name` is registered. Called inside
/// the caller's transaction so the check and the effect are atomic.
pub(crate) fn require(conn: &Connection, name: &TableName) -> StoreResult<()> {
    if is_registered(conn, name)? {
        Ok(())
    } else {
        Err(StoreError::table_not_found(name))
    }
}
