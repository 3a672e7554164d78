//! Object kinds and usage locations.
//!
//! `ObjectType` serializes as `snake_case`, matching the `type` and
//! `usage_type` columns of the catalog and report tables.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// ObjectType
// ---------------------------------------------------------------------------

/// Kind of a configuration object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Category,
    ComputerGroup,
    Policy,
    ConfigurationProfile,
    ExtensionAttribute,
    Package,
    Script,
    AdvancedComputerSearch,
    ComputerPrestage,
}

impl ObjectType {
    /// Every object kind, in catalog emission order.
    pub const ALL: [Self; 9] = [
        Self::Category,
        Self::ComputerGroup,
        Self::Policy,
        Self::ConfigurationProfile,
        Self::ExtensionAttribute,
        Self::Package,
        Self::Script,
        Self::AdvancedComputerSearch,
        Self::ComputerPrestage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::ComputerGroup => "computer_group",
            Self::Policy => "policy",
            Self::ConfigurationProfile => "configuration_profile",
            Self::ExtensionAttribute => "extension_attribute",
            Self::Package => "package",
            Self::Script => "script",
            Self::AdvancedComputerSearch => "advanced_computer_search",
            Self::ComputerPrestage => "computer_prestage",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UsageLocation
// ---------------------------------------------------------------------------

/// Where a reference occurs inside the referencing object.
///
/// ```text
/// scope:targets            policy/profile target group
/// scope:exclusions         policy/profile excluded group
/// criteria:<search_type>   smart group / advanced search criterion
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageLocation {
    ScopeTargets,
    ScopeExclusions,
    /// Criterion search type with spaces replaced by underscores.
    Criteria(String),
}

impl UsageLocation {
    /// Build a criteria location from a raw search type (`"member of"` →
    /// `criteria:member_of`).
    #[must_use]
    pub fn criteria(search_type: &str) -> Self {
        Self::Criteria(search_type.replace(' ', "_"))
    }
}

impl fmt::Display for UsageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScopeTargets => f.write_str("scope:targets"),
            Self::ScopeExclusions => f.write_str("scope:exclusions"),
            Self::Criteria(search_type) => write!(f, "criteria:{search_type}"),
        }
    }
}

impl Serialize for UsageLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
