//! SQLite connection management for Roster.
//!
//! A [`Database`] is the single storage handle every Roster component is
//! built from. It is cheap to clone; clones share one connection behind a
//! mutex, and all work runs inside a transaction so callers never observe
//! a half-applied mutation.

mod config;
mod error;
mod schema;

pub use config::{DbConfig, JournalMode};
pub use error::{DbError, DbResult};
pub use schema::SCHEMA_VERSION;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{info, warn};

/// Shared handle to the Roster database.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    /// Opens (or creates) the database described by `config`.
    pub fn open(config: &DbConfig) -> DbResult<Self> {
        let conn = match &config.path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                let conn = Connection::open(path)?;
                let mode: String = conn.pragma_update_and_check(
                    None,
                    "journal_mode",
                    config.journal_mode.as_pragma(),
                    |row| row.get(0),
                )?;
                info!(path = %path.display(), journal_mode = %mode, "Opened roster database");
                conn
            }
            None => {
                info!("Opened in-memory roster database");
                Connection::open_in_memory()?
            }
        };
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
        Self::open_with_conn(Arc::new(Mutex::new(conn)))
    }

    /// Opens a private in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        Self::open(&DbConfig::in_memory())
    }

    /// Wraps an existing connection, enabling foreign keys and creating the
    /// schema if needed.
    pub fn open_with_conn(conn: Arc<Mutex<Connection>>) -> DbResult<Self> {
        let db = Self { conn };
        {
            let conn = db.lock()?;
            conn.pragma_update(None, "foreign_keys", true)?;
            schema::init_schema(&conn)?;
        }
        Ok(db)
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            warn!("Roster database lock poisoned");
            DbError::LockPoisoned
        })
    }

    /// Runs `f` in a deferred (read) transaction.
    pub fn read<T, E>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError> + From<rusqlite::Error>,
    {
        self.run(TransactionBehavior::Deferred, f)
    }

    /// Runs `f` in an immediate (write) transaction. The transaction
    /// commits only if `f` succeeds; otherwise it rolls back.
    pub fn write<T, E>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError> + From<rusqlite::Error>,
    {
        self.run(TransactionBehavior::Immediate, f)
    }

    fn run<T, E>(
        &self,
        behavior: TransactionBehavior,
        f: impl FnOnce(&Transaction<'_>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<DbError> + From<rusqlite::Error>,
    {
        let mut conn = self.lock()?;
        let tx = conn.transaction_with_behavior(behavior)?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
