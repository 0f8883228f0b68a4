//! Error types for the store layer.

use crate::outcome::ErrorKind;
use roster_db::DbError;
use roster_types::{NameError, RecordId, TableName};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed table name.
    #[error("invalid table name: {0}")]
    InvalidName(#[from] NameError),

    /// Create on a name that is already registered.
    #[error("table '{0}' already exists")]
    AlreadyExists(TableName),

    /// Operation on a name that is not registered. Carries the name as the
    /// caller supplied it, which may not be a valid table name.
    #[error("table '{0}' does not exist")]
    TableNotFound(String),

    /// No record with this id in the table.
    #[error("record {id} not found in table '{table}'")]
    RecordNotFound { table: TableName, id: RecordId },

    /// Storage fault.
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl StoreError {
    pub(crate) fn table_not_found(name: &TableName) -> Self {
        Self::TableNotFound(name.to_string())
    }

    /// The boundary-facing category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidName(_) => ErrorKind::InvalidName,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::TableNotFound(_) => ErrorKind::TableNotFound,
            Self::RecordNotFound { .. } => ErrorKind::NotFound,
            Self::Database(_) => ErrorKind::Internal,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(DbError::Sqlite(err))
    }
}
