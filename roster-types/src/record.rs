//! Records stored in a table, and the payloads that create and change them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a record within its table.
///
/// Assigned by the store, strictly increasing per table and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// A stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub level: i64,
}

/// Payload for inserting a record. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub level: i64,
}

impl NewRecord {
    pub fn new(name: impl Into<String>, level: i64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// One field of a partial update.
///
/// `Unspecified` means the caller did not mention the field and it must be
/// left untouched. There is no "clear" state because no record field is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    #[default]
    Unspecified,
    Set(T),
}

impl<T> Field<T> {
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Returns the new value, if one was given.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unspecified => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

// Only reached for keys present in the input; absent keys fall back to
// `Default` through `#[serde(default)]`. An explicit null is rejected by
// `T`'s own deserializer.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Set)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Unspecified => serializer.serialize_none(),
        }
    }
}

/// Partial update of a record. Omitted fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Field::is_unspecified")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unspecified")]
    pub level: Field<i64>,
}

impl RecordPatch {
    /// A patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Field::Set(name.into());
        self
    }

    #[must_use]
    pub fn level(mut self, level: i64) -> Self {
        self.level = Field::Set(level);
        self
    }

    /// True when neither field is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_unspecified() && self.level.is_unspecified()
    }

    /// Applies the specified fields to `record` in place.
    pub fn apply_to(&self, record: &mut Record) {
        if let Field::Set(name) = &self.name {
            record.name.clone_from(name);
        }
        if let Field::Set(level) = self.level {
            record.level = level;
        }
    }
}
