//! Connection settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SQLite journal mode applied to file-backed databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    #[default]
    Wal,
    Delete,
    Truncate,
}

impl JournalMode {
    pub(crate) fn as_pragma(self) -> &'static str {
        match self {
            Self::Wal => "WAL",
            Self::Delete => "DELETE",
            Self::Truncate => "TRUNCATE",
        }
    }
}

/// Configuration for opening a [`Database`](crate::Database).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Database file. `None` opens a private in-memory database.
    pub path: Option<PathBuf>,
    /// How long a statement waits on a locked file before failing (ms).
    pub busy_timeout_ms: u64,
    /// Journal mode for file-backed databases. Ignored in memory.
    pub journal_mode: JournalMode,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: 5_000,
            journal_mode: JournalMode::default(),
        }
    }
}

impl DbConfig {
    /// In-memory database with default settings.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed database at `path` with default settings.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}
