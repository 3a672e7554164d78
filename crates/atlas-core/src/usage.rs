//! Usage edges.

use serde::Serialize;

use crate::{ObjectId, ObjectType, UsageLocation};

/// The referencing side of a usage edge.
///
/// One source is built per fetched object and stamped onto each edge it
/// emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSource {
    pub object_type: ObjectType,
    pub id: ObjectId,
    pub name: String,
    pub category: Option<String>,
    pub enabled: Option<bool>,
}

impl UsageSource {
    /// Source with only a kind, id and name (groups, searches, prestages).
    #[must_use]
    pub const fn new(object_type: ObjectType, id: ObjectId, name: String) -> Self {
        Self {
            object_type,
            id,
            name,
            category: None,
            enabled: None,
        }
    }

    /// Emit one edge from this source.
    #[must_use]
    pub fn edge(
        &self,
        usage_type: ObjectType,
        usage_location: Option<UsageLocation>,
        usage_id: Option<ObjectId>,
        usage_name: Option<String>,
    ) -> UsageEdge {
        UsageEdge {
            object_type: self.object_type,
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            enabled: self.enabled,
            usage_type,
            usage_location,
            usage_id,
            usage_name,
        }
    }
}

/// A single reference from one configuration object to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEdge {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub id: ObjectId,
    pub name: String,
    pub category: Option<String>,
    pub enabled: Option<bool>,
    pub usage_type: ObjectType,
    pub usage_location: Option<UsageLocation>,
    pub usage_id: Option<ObjectId>,
    pub usage_name: Option<String>,
}
