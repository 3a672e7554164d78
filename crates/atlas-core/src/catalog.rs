//! Catalog entries.
//!
//! [`ConfigObject`] carries exactly the fields that apply to each object
//! kind. When serialized it is flattened through [`CatalogRow`], so every row
//! has the same key set in the same order and inapplicable fields are
//! `null`.

use serde::{Serialize, Serializer};

use crate::{ObjectId, ObjectType};

/// Flattened scope of a policy or configuration profile.
///
/// Each field is a summary string; an empty string means the scope part was
/// fetched and had nothing in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSummaries {
    pub targets: String,
    pub limitations: String,
    pub exclusions: String,
}

/// One entry of the object catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigObject {
    Category {
        id: ObjectId,
        name: String,
    },
    ComputerGroup {
        id: ObjectId,
        name: String,
        is_smart: Option<bool>,
    },
    Policy {
        id: ObjectId,
        name: String,
        category: Option<String>,
        enabled: Option<bool>,
        scope: ScopeSummaries,
    },
    ConfigurationProfile {
        id: ObjectId,
        name: String,
        category: Option<String>,
        scope: ScopeSummaries,
    },
    ExtensionAttribute {
        id: ObjectId,
        name: String,
        enabled: Option<bool>,
    },
    Package {
        id: ObjectId,
        name: String,
        category: Option<String>,
    },
    Script {
        id: ObjectId,
        name: String,
        category: Option<String>,
    },
    AdvancedComputerSearch {
        id: ObjectId,
        name: String,
    },
    ComputerPrestage {
        id: ObjectId,
        name: String,
    },
}

impl ConfigObject {
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Category { .. } => ObjectType::Category,
            Self::ComputerGroup { .. } => ObjectType::ComputerGroup,
            Self::Policy { .. } => ObjectType::Policy,
            Self::ConfigurationProfile { .. } => ObjectType::ConfigurationProfile,
            Self::ExtensionAttribute { .. } => ObjectType::ExtensionAttribute,
            Self::Package { .. } => ObjectType::Package,
            Self::Script { .. } => ObjectType::Script,
            Self::AdvancedComputerSearch { .. } => ObjectType::AdvancedComputerSearch,
            Self::ComputerPrestage { .. } => ObjectType::ComputerPrestage,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ObjectId {
        match self {
            Self::Category { id, .. }
            | Self::ComputerGroup { id, .. }
            | Self::Policy { id, .. }
            | Self::ConfigurationProfile { id, .. }
            | Self::ExtensionAttribute { id, .. }
            | Self::Package { id, .. }
            | Self::Script { id, .. }
            | Self::AdvancedComputerSearch { id, .. }
            | Self::ComputerPrestage { id, .. } => id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Category { name, .. }
            | Self::ComputerGroup { name, .. }
            | Self::Policy { name, .. }
            | Self::ConfigurationProfile { name, .. }
            | Self::ExtensionAttribute { name, .. }
            | Self::Package { name, .. }
            | Self::Script { name, .. }
            | Self::AdvancedComputerSearch { name, .. }
            | Self::ComputerPrestage { name, .. } => name,
        }
    }

    /// Flatten into the uniform row shape.
    #[must_use]
    pub fn row(&self) -> CatalogRow<'_> {
        let mut row = CatalogRow {
            object_type: self.object_type(),
            id: self.id(),
            name: self.name(),
            is_smart: None,
            category: None,
            enabled: None,
            scope_targets: None,
            scope_limitations: None,
            scope_exclusions: None,
        };

        match self {
            Self::ComputerGroup { is_smart, .. } => row.is_smart = *is_smart,
            Self::Policy {
                category,
                enabled,
                scope,
                ..
            } => {
                row.category = category.as_deref();
                row.enabled = *enabled;
                row.set_scope(scope);
            }
            Self::ConfigurationProfile {
                category, scope, ..
            } => {
                row.category = category.as_deref();
                row.set_scope(scope);
            }
            Self::ExtensionAttribute { enabled, .. } => row.enabled = *enabled,
            Self::Package { category, .. } | Self::Script { category, .. } => {
                row.category = category.as_deref();
            }
            Self::Category { .. }
            | Self::AdvancedComputerSearch { .. }
            | Self::ComputerPrestage { .. } => {}
        }

        row
    }
}

impl Serialize for ConfigObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.row().serialize(serializer)
    }
}

/// Uniform catalog row: the full key set of every catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow<'a> {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub id: &'a ObjectId,
    pub name: &'a str,
    pub is_smart: Option<bool>,
    pub category: Option<&'a str>,
    pub enabled: Option<bool>,
    pub scope_targets: Option<&'a str>,
    pub scope_limitations: Option<&'a str>,
    pub scope_exclusions: Option<&'a str>,
}

impl<'a> CatalogRow<'a> {
    fn set_scope(&mut self, scope: &'a ScopeSummaries) {
        self.scope_targets = Some(&scope.targets);
        self.scope_limitations = Some(&scope.limitations);
        self.scope_exclusions = Some(&scope.exclusions);
    }
}
