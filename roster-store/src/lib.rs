//! Dynamic table storage for Roster.
//!
//! Callers provision named tables at runtime. Each table owns a set of
//! records (`id`, `name`, `level`) and at most one `(x, y)` position.
//!
//! # Architecture
//!
//! - [`TableRegistry`] tracks which tables exist
//! - [`RecordStore`] handles row CRUD with per-table id sequences
//! - [`PositionStore`] keeps the single position per table
//! - [`Roster`] exposes all of them as named operations for a request
//!   boundary, converting failures to [`BoundaryError`]s
//!
//! All components share one explicitly constructed
//! [`Database`](roster_db::Database) handle. Table names are validated
//! against an allowlist and only ever bound as SQL parameters.

mod error;
mod facade;
mod outcome;
mod positions;
mod records;
mod registry;

pub use error::{StoreError, StoreResult};
pub use facade::Roster;
pub use outcome::{Ack, BoundaryError, ErrorKind, Outcome, PositionState};
pub use positions::PositionStore;
pub use records::RecordStore;
pub use registry::TableRegistry;

pub use roster_db::{Database, DbConfig};
pub use roster_types::{
    Field, NameError, NewRecord, Position, Record, RecordId, RecordPatch, TableName,
};
