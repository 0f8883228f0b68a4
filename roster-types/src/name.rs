//! Validated table names.
//!
//! Table names arrive from callers at request time, so they are untrusted.
//! A `TableName` can only be built from a string that passes the allowlist,
//! and the storage layer only ever uses it as a bound key.

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest accepted table name, in bytes.
pub const MAX_TABLE_NAME_LEN: usize = 64;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("table name pattern compiles"));

/// Reasons a string is rejected as a table name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is empty.
    #[error("table name must not be empty")]
    Empty,

    /// The name exceeds [`MAX_TABLE_NAME_LEN`].
    #[error("table name must be at most {max} bytes, got {len}")]
    TooLong { len: usize, max: usize },

    /// The name contains something other than letters, digits or underscores.
    #[error("table name {0:?} may only contain letters, digits and underscores")]
    InvalidCharacters(String),
}

/// Name of a dynamically provisioned table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    /// Validates `raw` and wraps it.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        if raw.len() > MAX_TABLE_NAME_LEN {
            return Err(NameError::TooLong {
                len: raw.len(),
                max: MAX_TABLE_NAME_LEN,
            });
        }
        if !NAME_PATTERN.is_match(raw) {
            return Err(NameError::InvalidCharacters(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TableName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TableName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
