//! The single position value attached to each table.

use crate::error::{StoreError, StoreResult};
use crate::registry::require;
use roster_db::Database;
use roster_types::{Position, TableName};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

/// Keeps at most one position per table.
///
/// SQLite stores NaN as NULL, so a NULL coordinate reads back as NaN and
/// every `f64` round-trips.
#[derive(Debug, Clone)]
pub struct PositionStore {
    db: Database,
}

impl PositionStore {
    /// Creates a position store on the shared database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Creates or replaces the table's position.
    pub fn set(&self, table: &TableName, position: Position) -> StoreResult<()> {
        self.db.write::<_, StoreError>(|tx| {
            require(tx, table)?;
            tx.execute(
                "INSERT INTO roster_positions (table_name, x, y) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(table_name) DO UPDATE SET x = excluded.x, y = excluded.y",
                params![table.as_str(), position.x, position.y],
            )?;
            Ok(())
        })?;
        debug!(table = %table, x = position.x, y = position.y, "Position set");
        Ok(())
    }

    /// Returns `None` if the table exists but no position was ever set.
    pub fn get(&self, table: &TableName) -> StoreResult<Option<Position>> {
        self.db.read(|tx| {
            require(tx, table)?;
            let position = tx
                .query_row(
                    "SELECT x, y FROM roster_positions WHERE table_name = ?1",
                    params![table.as_str()],
                    |row| Ok(Position::new(coordinate(row, 0)?, coordinate(row, 1)?)),
                )
                .optional()?;
            Ok(position)
        })
    }
}

fn coordinate(row: &Row<'_>, idx: usize) -> rusqlite::Result<f64> {
    Ok(row.get::<_, Option<f64>>(idx)?.unwrap_or(f64::NAN))
}
