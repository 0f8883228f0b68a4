//! Fixed schema shared by every dynamically created table.
//!
//! Caller-supplied table names are rows in `roster_tables`, never SQL
//! identifiers. Records and positions reference their owner by that row
//! and cascade with it.

use crate::error::{DbError, DbResult};
use rusqlite::Connection;
use tracing::debug;

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS roster_tables (
    name TEXT PRIMARY KEY NOT NULL,
    last_id INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS roster_records (
    table_name TEXT NOT NULL REFERENCES roster_tables(name) ON DELETE CASCADE,
    id INTEGER NOT NULL,
    name TEXT NOT NULL,
    level INTEGER NOT NULL,
    PRIMARY KEY (table_name, id)
);

CREATE INDEX IF NOT EXISTS roster_records_by_name
    ON roster_records (table_name, name);

CREATE TABLE IF NOT EXISTS roster_positions (
    table_name TEXT PRIMARY KEY NOT NULL REFERENCES roster_tables(name) ON DELETE CASCADE,
    -- NULL stands for NaN, which SQLite cannot store as REAL.
    x REAL,
    y REAL
);
";

pub(crate) fn init_schema(conn: &Connection) -> DbResult<()> {
    let found: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if found > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchema {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    conn.execute_batch(SCHEMA)?;
    if found < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        debug!(from = found, to = SCHEMA_VERSION, "Schema initialized");
    }
    Ok(())
}
