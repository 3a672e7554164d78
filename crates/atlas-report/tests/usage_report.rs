mod common;

use atlas_client::FetchError;
use atlas_core::{ObjectId, ObjectType, UsageEdge, UsageLocation};
use atlas_report::UsageReport;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{client, empty_server, server};

/// `(type, id, usage_type, location, usage_id, usage_name)`
type EdgeKey = (
    ObjectType,
    String,
    ObjectType,
    Option<String>,
    Option<String>,
    Option<String>,
);

fn key(edge: &UsageEdge) -> EdgeKey {
    (
        edge.object_type,
        edge.id.to_string(),
        edge.usage_type,
        edge.usage_location.as_ref().map(ToString::to_string),
        edge.usage_id.as_ref().map(ToString::to_string),
        edge.usage_name.clone(),
    )
}

fn expected(
    object_type: ObjectType,
    id: &str,
    usage_type: ObjectType,
    location: Option<&str>,
    usage_id: Option<&str>,
    usage_name: &str,
) -> EdgeKey {
    (
        object_type,
        id.to_string(),
        usage_type,
        location.map(str::to_string),
        usage_id.map(str::to_string),
        Some(usage_name.to_string()),
    )
}

#[tokio::test]
async fn full_report_in_source_order() {
    use ObjectType::{
        AdvancedComputerSearch, ComputerGroup, ComputerPrestage, ConfigurationProfile, Package,
        Policy, Script,
    };

    let client = client(server());
    let edges = UsageReport::new(&client).build().await.unwrap();
    let keys: Vec<EdgeKey> = edges.iter().map(key).collect();

    assert_eq!(
        keys,
        [
            expected(
                ComputerGroup,
                "1",
                ComputerGroup,
                Some("criteria:member_of"),
                None,
                "Laptops"
            ),
            expected(ComputerGroup, "1", Package, Some("criteria:has"), None, "Chrome.pkg"),
            expected(Policy, "10", ComputerGroup, Some("scope:targets"), Some("1"), "All Managed"),
            expected(Policy, "10", ComputerGroup, Some("scope:targets"), Some("2"), "Static Lab"),
            expected(Policy, "10", ComputerGroup, Some("scope:exclusions"), Some("3"), "Kiosks"),
            expected(Policy, "10", Script, None, Some("5"), "postinstall.sh"),
            expected(Policy, "10", Package, None, Some("7"), "Firefox.pkg"),
            expected(
                ConfigurationProfile,
                "20",
                ComputerGroup,
                Some("scope:exclusions"),
                Some("2"),
                "Static Lab"
            ),
            expected(
                AdvancedComputerSearch,
                "40",
                Package,
                Some("criteria:has"),
                None,
                "Chrome.pkg"
            ),
            expected(
                AdvancedComputerSearch,
                "40",
                ConfigurationProfile,
                Some("criteria:is"),
                None,
                "Wi-Fi"
            ),
            expected(ComputerPrestage, "50", Package, None, Some("8"), "Agent.pkg"),
            expected(ComputerPrestage, "50", ConfigurationProfile, None, Some("20"), "Wi-Fi"),
        ]
    );
}

#[tokio::test]
async fn static_groups_contribute_no_edges() {
    let client = client(server());
    let edges = UsageReport::new(&client).build().await.unwrap();

    assert!(
        !edges
            .iter()
            .any(|e| e.object_type == ObjectType::ComputerGroup && e.id == ObjectId::from(2))
    );
}

#[tokio::test]
async fn policy_edges_carry_category_and_enabled() {
    let client = client(server());
    let edges = UsageReport::new(&client).build().await.unwrap();

    let policy_edges: Vec<&UsageEdge> = edges
        .iter()
        .filter(|e| e.object_type == ObjectType::Policy)
        .collect();
    assert_eq!(policy_edges.len(), 5);
    for edge in policy_edges {
        assert_eq!(edge.name, "Install Firefox");
        assert_eq!(edge.category.as_deref(), Some("Browsers"));
        assert_eq!(edge.enabled, Some(true));
    }

    let profile_edge = edges
        .iter()
        .find(|e| e.object_type == ObjectType::ConfigurationProfile)
        .unwrap();
    assert_eq!(profile_edge.category.as_deref(), Some("Security"));
    assert_eq!(profile_edge.enabled, None);
}

#[tokio::test]
async fn one_policy_two_targets_one_exclusion_one_script_one_package() {
    let transport = empty_server()
        .with(
            "JSSResource/policies",
            json!({"policies": [{"id": 3, "name": "Baseline"}]}),
        )
        .with(
            "JSSResource/policies/id/3",
            json!({"policy": {
                "general": {"id": 3, "name": "Baseline", "enabled": false},
                "scope": {
                    "computer_groups": [{"id": 11, "name": "A"}, {"id": 12, "name": "B"}],
                    "exclusions": {"computer_groups": [{"id": 13, "name": "C"}]}
                },
                "scripts": [{"id": 21, "name": "s.sh"}],
                "package_configuration": {"packages": [{"id": 31, "name": "p.pkg"}]}
            }}),
        );
    let client = client(transport);

    let edges = UsageReport::new(&client).build().await.unwrap();

    assert_eq!(edges.len(), 5);
    let locations: Vec<Option<&UsageLocation>> =
        edges.iter().map(|e| e.usage_location.as_ref()).collect();
    assert_eq!(
        locations,
        [
            Some(&UsageLocation::ScopeTargets),
            Some(&UsageLocation::ScopeTargets),
            Some(&UsageLocation::ScopeExclusions),
            None,
            None,
        ]
    );
    assert_eq!(edges[0].category, None);
    assert_eq!(edges[0].enabled, Some(false));
}

#[tokio::test]
async fn edges_serialize_as_report_rows() {
    let client = client(server());
    let edges = UsageReport::new(&client).build().await.unwrap();

    assert_eq!(
        serde_json::to_value(&edges[0]).unwrap(),
        json!({
            "type": "computer_group",
            "id": "1",
            "name": "All Managed",
            "category": null,
            "enabled": null,
            "usage_type": "computer_group",
            "usage_location": "criteria:member_of",
            "usage_id": null,
            "usage_name": "Laptops"
        })
    );
}

#[tokio::test]
async fn failed_group_detail_aborts_the_report() {
    let transport = server().failing("JSSResource/computergroups/id/2", 403);
    let client = client(transport);

    let err = UsageReport::new(&client).build().await.unwrap_err();

    assert!(matches!(err, FetchError::Api { status: 403, .. }));
    assert!(
        !client
            .transport()
            .requests()
            .iter()
            .any(|r| r == "JSSResource/policies")
    );
}

#[tokio::test]
async fn missing_prestage_package_aborts_the_report() {
    let transport = server().with(
        common::PRESTAGES,
        json!({"totalCount": 1, "results": [{
            "id": "50",
            "displayName": "Default DEP",
            "customPackageIds": ["99"],
            "prestageInstalledProfileIds": []
        }]}),
    );
    let client = client(transport);

    let err = UsageReport::new(&client).build().await.unwrap_err();
    assert!(matches!(err, FetchError::Api { status: 404, .. }));
}

#[tokio::test]
async fn empty_server_has_no_edges() {
    let client = client(empty_server());
    let edges = UsageReport::new(&client).build().await.unwrap();
    assert!(edges.is_empty());
}
