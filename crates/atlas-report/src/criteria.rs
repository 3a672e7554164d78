//! Criteria resolution for smart groups and advanced searches.
//!
//! A criterion references another object only through its name and value
//! (`"Computer Group" member of "Laptops"`). [`CRITERIA_USAGE`] maps the
//! criterion names that point at a modeled object kind; criteria with any
//! other name produce no edge.

use atlas_client::models::Criterion;
use atlas_core::{ObjectType, UsageEdge, UsageLocation, UsageSource};

/// Criterion name → kind of the referenced object.
pub const CRITERIA_USAGE: &[(&str, ObjectType)] = &[
    ("Computer Group", ObjectType::ComputerGroup),
    (
        "Enrollment Method: PreStage enrollment",
        ObjectType::ComputerPrestage,
    ),
    ("Packages Installed By Casper", ObjectType::Package),
    ("Packages Installed By Installer.app/SWU", ObjectType::Package),
    ("Cached Packages", ObjectType::Package),
    ("Profile Name", ObjectType::ConfigurationProfile),
];

/// Object kind referenced by a criterion name, if it is one we track.
#[must_use]
pub fn usage_type_for(criterion_name: &str) -> Option<ObjectType> {
    CRITERIA_USAGE
        .iter()
        .find(|(name, _)| *name == criterion_name)
        .map(|(_, usage_type)| *usage_type)
}

/// One edge per recognized criterion, in criteria order.
///
/// The edge location is `criteria:<search_type>` and the referenced object
/// is known only by the criterion value, so `usage_id` stays empty.
pub fn criteria_edges<'a>(
    source: &'a UsageSource,
    criteria: &'a [Criterion],
) -> impl Iterator<Item = UsageEdge> + 'a {
    criteria.iter().filter_map(move |criterion| {
        let Some(usage_type) = usage_type_for(&criterion.name) else {
            tracing::trace!(
                criterion = %criterion.name,
                source = %source.name,
                "criterion not tracked"
            );
            return None;
        };
        Some(source.edge(
            usage_type,
            Some(UsageLocation::criteria(&criterion.search_type)),
            None,
            Some(criterion.value.clone()),
        ))
    })
}
