//! Core type definitions for Roster.
//!
//! This crate defines the plain data types shared by the storage layer and
//! its callers:
//! - Validated table names
//! - Records, insert payloads and partial updates
//! - Per-table positions
//!
//! Nothing here touches storage.

mod name;
mod position;
mod record;

pub use name::{NameError, TableName, MAX_TABLE_NAME_LEN};
pub use position::Position;
pub use record::{Field, NewRecord, Record, RecordId, RecordPatch};
