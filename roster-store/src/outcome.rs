//! Boundary-facing results.
//!
//! These are the shapes a transport layer encodes back to callers. Every
//! failure carries a stable [`ErrorKind`] plus a human-readable detail.

use crate::error::StoreError;
use roster_types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Result type for [`Roster`](crate::Roster) operations.
pub type Outcome<T> = Result<T, BoundaryError>;

/// Stable failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidName,
    AlreadyExists,
    TableNotFound,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Suggested HTTP status for this kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidName => 400,
            Self::AlreadyExists => 409,
            Self::TableNotFound | Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::AlreadyExists => "already_exists",
            Self::TableNotFound => "table_not_found",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed operation, as seen by the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct BoundaryError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl From<StoreError> for BoundaryError {
    fn from(err: StoreError) -> Self {
        let kind = err.kind();
        if kind == ErrorKind::Internal {
            warn!(error = %err, "Storage failure");
        }
        Self {
            kind,
            detail: err.to_string(),
        }
    }
}

/// Acknowledgement of a mutation that returns no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a position lookup on an existing table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PositionState {
    Set { x: f64, y: f64 },
    NotSet,
}

impl From<Option<Position>> for PositionState {
    fn from(position: Option<Position>) -> Self {
        match position {
            Some(Position { x, y }) => Self::Set { x, y },
            None => Self::NotSet,
        }
    }
}

impl PositionState {
    /// The position, if one is set.
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Set { x, y } => Some(Position::new(x, y)),
            Self::NotSet => None,
        }
    }
}
