//! Response payloads of the endpoints Atlas reads.
//!
//! Only the fields used by the catalog and the usage report are modeled;
//! everything else in the payloads is ignored. Lists default to empty when a
//! field is absent.

use atlas_core::ObjectId;
use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

/// `{id, name}` pair used by list endpoints and by references inside detail
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
}

// ── Computer groups / advanced searches ────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComputerGroupSummary {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_smart: Option<bool>,
}

/// One smart-group or advanced-search criterion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub and_or: Option<String>,
    #[serde(default)]
    pub search_type: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComputerGroup {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_smart: bool,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdvancedComputerSearch {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

// ── Policies / configuration profiles ──────────────────────────────

/// `general` block shared by policies and configuration profiles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct General {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl General {
    #[must_use]
    pub fn category_name(&self) -> Option<String> {
        self.category.as_ref().map(|c| c.name.clone())
    }
}

/// Targeting of a policy or configuration profile.
///
/// Keeps the raw mapping in document order for scope summaries, and decodes
/// the target and excluded computer groups up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    entries: Map<String, Value>,
    computer_groups: Vec<NamedRef>,
    excluded_computer_groups: Vec<NamedRef>,
}

impl Scope {
    /// Top-level scope keys (`all_computers`, `computer_groups`, ...).
    #[must_use]
    pub const fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Nested section such as `limitations` or `exclusions`.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.entries.get(key).and_then(Value::as_object)
    }

    #[must_use]
    pub fn computer_groups(&self) -> &[NamedRef] {
        &self.computer_groups
    }

    #[must_use]
    pub fn excluded_computer_groups(&self) -> &[NamedRef] {
        &self.excluded_computer_groups
    }
}

fn named_list(map: &Map<String, Value>, key: &str) -> Result<Vec<NamedRef>, serde_json::Error> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Vec::<NamedRef>::deserialize(value),
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Map::<String, Value>::deserialize(deserializer)?;
        let computer_groups = named_list(&entries, "computer_groups").map_err(de::Error::custom)?;
        let excluded_computer_groups = match entries.get("exclusions").and_then(Value::as_object) {
            Some(exclusions) => {
                named_list(exclusions, "computer_groups").map_err(de::Error::custom)?
            }
            None => Vec::new(),
        };

        Ok(Self {
            entries,
            computer_groups,
            excluded_computer_groups,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageConfiguration {
    #[serde(default)]
    pub packages: Vec<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Policy {
    pub general: General,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub scripts: Vec<NamedRef>,
    #[serde(default)]
    pub package_configuration: PackageConfiguration,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigurationProfile {
    pub general: General,
    #[serde(default)]
    pub scope: Scope,
}

// ── Extension attributes / packages / scripts ──────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtensionAttribute {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Package detail. `category` is a plain name in this payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Package {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Script {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

// ── Prestages (v3) ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerPrestage {
    pub id: ObjectId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub custom_package_ids: Vec<ObjectId>,
    #[serde(default)]
    pub prestage_installed_profile_ids: Vec<ObjectId>,
}
