//! Scope flattening.
//!
//! A scope mapping such as
//!
//! ```text
//! {"all_computers": true, "computer_groups": [], "buildings": [{"id": 1, "name": "HQ"}]}
//! ```
//!
//! flattens to `all_computers, buildings: [HQ]`: true flags become bare keys,
//! non-empty lists become `key: [name, name]`, everything else is dropped.
//! Keys are visited in document order.

use atlas_client::models::Scope;
use atlas_core::ScopeSummaries;
use serde_json::{Map, Value};

/// Flatten one scope mapping into a summary string.
///
/// An empty mapping, or one with nothing to report, yields `""`.
#[must_use]
pub fn summarize(scope: &Map<String, Value>) -> String {
    scope
        .iter()
        .filter_map(|(key, value)| token(key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summaries of the target, limitation and exclusion parts of a scope.
///
/// A missing `limitations` or `exclusions` section summarizes as `""`.
#[must_use]
pub fn summarize_scope(scope: &Scope) -> ScopeSummaries {
    ScopeSummaries {
        targets: summarize(scope.entries()),
        limitations: scope.section("limitations").map(summarize).unwrap_or_default(),
        exclusions: scope.section("exclusions").map(summarize).unwrap_or_default(),
    }
}

fn token(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::Bool(true) => Some(key.to_string()),
        Value::Array(items) if !items.is_empty() => {
            let names = items.iter().map(entity_name).collect::<Vec<_>>().join(", ");
            Some(format!("{key}: [{names}]"))
        }
        _ => None,
    }
}

fn entity_name(item: &Value) -> &str {
    item.get("name").and_then(Value::as_str).unwrap_or_default()
}
