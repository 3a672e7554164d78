//! Shared fixtures: an in-memory Jamf Pro server.

#![allow(dead_code)]

use atlas_client::JamfClient;
use atlas_client::mock::MockTransport;
use serde_json::json;

pub const PRESTAGES: &str = "api/v3/computer-prestages?page-size=100&page=0";

/// A server where every list endpoint is present and empty.
pub fn empty_server() -> MockTransport {
    MockTransport::new()
        .with("JSSResource/categories", json!({"categories": []}))
        .with("JSSResource/computergroups", json!({"computer_groups": []}))
        .with("JSSResource/policies", json!({"policies": []}))
        .with(
            "JSSResource/osxconfigurationprofiles",
            json!({"os_x_configuration_profiles": []}),
        )
        .with(
            "JSSResource/computerextensionattributes",
            json!({"computer_extension_attributes": []}),
        )
        .with("JSSResource/packages", json!({"packages": []}))
        .with("JSSResource/scripts", json!({"scripts": []}))
        .with(
            "JSSResource/advancedcomputersearches",
            json!({"advanced_computer_searches": []}),
        )
        .with(PRESTAGES, json!({"totalCount": 0, "results": []}))
}

/// A small but complete server: two categories, a smart and a static group,
/// one policy, one profile, one extension attribute, two packages, one
/// script, one advanced search and one prestage.
pub fn server() -> MockTransport {
    empty_server()
        .with(
            "JSSResource/categories",
            json!({"categories": [
                {"id": 1, "name": "Browsers"},
                {"id": 2, "name": "Security"}
            ]}),
        )
        .with(
            "JSSResource/computergroups",
            json!({"computer_groups": [
                {"id": 1, "name": "All Managed", "is_smart": true},
                {"id": 2, "name": "Static Lab", "is_smart": false}
            ]}),
        )
        .with(
            "JSSResource/computergroups/id/1",
            json!({"computer_group": {
                "id": 1,
                "name": "All Managed",
                "is_smart": true,
                "criteria": [
                    {"name": "Computer Group", "priority": 0, "and_or": "and",
                     "search_type": "member of", "value": "Laptops"},
                    {"name": "Operating System Version", "priority": 1, "and_or": "and",
                     "search_type": "like", "value": "14"},
                    {"name": "Cached Packages", "priority": 2, "and_or": "and",
                     "search_type": "has", "value": "Chrome.pkg"}
                ]
            }}),
        )
        .with(
            "JSSResource/computergroups/id/2",
            json!({"computer_group": {
                "id": 2,
                "name": "Static Lab",
                "is_smart": false,
                "criteria": [
                    {"name": "Computer Group", "search_type": "member of", "value": "ignored"}
                ]
            }}),
        )
        .with(
            "JSSResource/policies",
            json!({"policies": [{"id": 10, "name": "Install Firefox"}]}),
        )
        .with(
            "JSSResource/policies/id/10",
            json!({"policy": {
                "general": {
                    "id": 10,
                    "name": "Install Firefox",
                    "enabled": true,
                    "category": {"id": 1, "name": "Browsers"}
                },
                "scope": {
                    "all_computers": false,
                    "computers": [],
                    "computer_groups": [
                        {"id": 1, "name": "All Managed"},
                        {"id": 2, "name": "Static Lab"}
                    ],
                    "limitations": {
                        "users": [],
                        "network_segments": [{"id": 4, "name": "HQ"}]
                    },
                    "exclusions": {
                        "computers": [],
                        "computer_groups": [{"id": 3, "name": "Kiosks"}]
                    }
                },
                "scripts": [{"id": 5, "name": "postinstall.sh", "priority": "After"}],
                "package_configuration": {
                    "packages": [{"id": 7, "name": "Firefox.pkg", "action": "Install"}]
                }
            }}),
        )
        .with(
            "JSSResource/osxconfigurationprofiles",
            json!({"os_x_configuration_profiles": [{"id": 20, "name": "Wi-Fi"}]}),
        )
        .with(
            "JSSResource/osxconfigurationprofiles/id/20",
            json!({"os_x_configuration_profile": {
                "general": {
                    "id": 20,
                    "name": "Wi-Fi",
                    "category": {"id": 2, "name": "Security"}
                },
                "scope": {
                    "all_computers": true,
                    "computer_groups": [],
                    "exclusions": {"computer_groups": [{"id": 2, "name": "Static Lab"}]}
                }
            }}),
        )
        .with(
            "JSSResource/computerextensionattributes",
            json!({"computer_extension_attributes": [{"id": 30, "name": "Battery Health"}]}),
        )
        .with(
            "JSSResource/computerextensionattributes/id/30",
            json!({"computer_extension_attribute": {
                "id": 30,
                "name": "Battery Health",
                "enabled": true,
                "data_type": "String"
            }}),
        )
        .with(
            "JSSResource/packages",
            json!({"packages": [
                {"id": 7, "name": "Firefox.pkg"},
                {"id": 8, "name": "Agent.pkg"}
            ]}),
        )
        .with(
            "JSSResource/packages/id/7",
            json!({"package": {"id": 7, "name": "Firefox.pkg", "category": "Browsers"}}),
        )
        .with(
            "JSSResource/packages/id/8",
            json!({"package": {"id": 8, "name": "Agent.pkg", "category": "No category assigned"}}),
        )
        .with(
            "JSSResource/scripts",
            json!({"scripts": [{"id": 5, "name": "postinstall.sh"}]}),
        )
        .with(
            "JSSResource/scripts/id/5",
            json!({"script": {"id": 5, "name": "postinstall.sh", "category": "Tools"}}),
        )
        .with(
            "JSSResource/advancedcomputersearches",
            json!({"advanced_computer_searches": [{"id": 40, "name": "Outdated Chrome"}]}),
        )
        .with(
            "JSSResource/advancedcomputersearches/id/40",
            json!({"advanced_computer_search": {
                "id": 40,
                "name": "Outdated Chrome",
                "criteria": [
                    {"name": "Packages Installed By Installer.app/SWU",
                     "search_type": "has", "value": "Chrome.pkg"},
                    {"name": "Profile Name", "search_type": "is", "value": "Wi-Fi"}
                ]
            }}),
        )
        .with(
            PRESTAGES,
            json!({"totalCount": 1, "results": [{
                "id": "50",
                "displayName": "Default DEP",
                "customPackageIds": ["8"],
                "prestageInstalledProfileIds": ["20"]
            }]}),
        )
}

pub fn client(transport: MockTransport) -> JamfClient<MockTransport> {
    JamfClient::new(transport, 100)
}
