//! Error types for the database layer.

use thiserror::Error;

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur while opening or using the database.
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLite.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A thread panicked while holding the connection.
    #[error("database connection lock poisoned")]
    LockPoisoned,

    /// The file was written by a newer schema than this build understands.
    #[error("unsupported schema version {found} (expected at most {supported})")]
    UnsupportedSchema { found: i64, supported: i64 },
}
