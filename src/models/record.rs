//! Record contract and identifiers.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

/// Unique identifier for a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new record ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Contract a type must satisfy to live in a [`crate::Repository`].
///
/// Identity is the `id` alone: the repository never compares payload fields
/// when deciding whether two records are "the same". Two records with equal
/// ids and different payloads are one logical record, and upserting the
/// second replaces the first.
///
/// Serialization is the record's own field-for-field mapping; a document
/// missing a required field must fail to deserialize (serde's default
/// strictness — avoid `#[serde(default)]` on required fields).
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Returns the record's unique identifier.
    fn id(&self) -> &RecordId;
}
