//! Object identifiers.
//!
//! The classic API returns numeric ids (`"id": 12`) while the v3 API returns
//! string ids (`"id": "12"`, `"customPackageIds": ["3"]`). Both deserialize
//! into [`ObjectId`], which always serializes as a string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a configuration object on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ObjectId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(value) => Self::from(value),
            RawId::Text(value) => Self(value),
        })
    }
}
