//! Classic API endpoints (`JSSResource/...`).
//!
//! List endpoints wrap their records in a plural envelope key
//! (`{"policies": [...]}`); detail endpoints at `<path>/id/<id>` wrap the
//! record in a singular key (`{"policy": {...}}`).

use atlas_core::ObjectId;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::{
    AdvancedComputerSearch, ComputerGroup, ComputerGroupSummary, ConfigurationProfile,
    ExtensionAttribute, NamedRef, Package, Policy, Script,
};
use crate::transport::Transport;
use crate::JamfClient;

/// A classic resource: URL path plus its list and detail envelope keys.
struct Endpoint {
    path: &'static str,
    list_key: &'static str,
    detail_key: &'static str,
}

const CATEGORIES: Endpoint = Endpoint {
    path: "categories",
    list_key: "categories",
    detail_key: "category",
};

const COMPUTER_GROUPS: Endpoint = Endpoint {
    path: "computergroups",
    list_key: "computer_groups",
    detail_key: "computer_group",
};

const POLICIES: Endpoint = Endpoint {
    path: "policies",
    list_key: "policies",
    detail_key: "policy",
};

const CONFIGURATION_PROFILES: Endpoint = Endpoint {
    path: "osxconfigurationprofiles",
    list_key: "os_x_configuration_profiles",
    detail_key: "os_x_configuration_profile",
};

const EXTENSION_ATTRIBUTES: Endpoint = Endpoint {
    path: "computerextensionattributes",
    list_key: "computer_extension_attributes",
    detail_key: "computer_extension_attribute",
};

const PACKAGES: Endpoint = Endpoint {
    path: "packages",
    list_key: "packages",
    detail_key: "package",
};

const SCRIPTS: Endpoint = Endpoint {
    path: "scripts",
    list_key: "scripts",
    detail_key: "script",
};

const ADVANCED_COMPUTER_SEARCHES: Endpoint = Endpoint {
    path: "advancedcomputersearches",
    list_key: "advanced_computer_searches",
    detail_key: "advanced_computer_search",
};

/// Take `key` out of a response body and decode it.
fn unwrap_envelope<R: DeserializeOwned>(
    mut body: Value,
    key: &str,
    path: &str,
) -> Result<R, FetchError> {
    let inner = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| FetchError::parse(path, format!("response missing '{key}'")))?;
    serde_json::from_value(inner).map_err(|e| FetchError::parse(path, e))
}

impl<T: Transport> JamfClient<T> {
    async fn classic_list<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Vec<R>, FetchError> {
        let path = format!("JSSResource/{}", endpoint.path);
        let body = self.transport.get_json(&path).await?;
        unwrap_envelope(body, endpoint.list_key, &path)
    }

    async fn classic_get<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        id: &ObjectId,
    ) -> Result<R, FetchError> {
        let path = format!(
            "JSSResource/{}/id/{}",
            endpoint.path,
            urlencoding::encode(id.as_str())
        );
        let body = self.transport.get_json(&path).await?;
        unwrap_envelope(body, endpoint.detail_key, &path)
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn categories(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&CATEGORIES).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn computer_groups(&self) -> Result<Vec<ComputerGroupSummary>, FetchError> {
        self.classic_list(&COMPUTER_GROUPS).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn computer_group(&self, id: &ObjectId) -> Result<ComputerGroup, FetchError> {
        self.classic_get(&COMPUTER_GROUPS, id).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn policies(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&POLICIES).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn policy(&self, id: &ObjectId) -> Result<Policy, FetchError> {
        self.classic_get(&POLICIES, id).await
    }

    /// macOS configuration profiles.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn configuration_profiles(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&CONFIGURATION_PROFILES).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn configuration_profile(
        &self,
        id: &ObjectId,
    ) -> Result<ConfigurationProfile, FetchError> {
        self.classic_get(&CONFIGURATION_PROFILES, id).await
    }

    /// Computer extension attributes.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn extension_attributes(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&EXTENSION_ATTRIBUTES).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn extension_attribute(
        &self,
        id: &ObjectId,
    ) -> Result<ExtensionAttribute, FetchError> {
        self.classic_get(&EXTENSION_ATTRIBUTES, id).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn packages(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&PACKAGES).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn package(&self, id: &ObjectId) -> Result<Package, FetchError> {
        self.classic_get(&PACKAGES, id).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn scripts(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&SCRIPTS).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn script(&self, id: &ObjectId) -> Result<Script, FetchError> {
        self.classic_get(&SCRIPTS, id).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn advanced_computer_searches(&self) -> Result<Vec<NamedRef>, FetchError> {
        self.classic_list(&ADVANCED_COMPUTER_SEARCHES).await
    }

    /// # Errors
    ///
    /// Returns [`FetchError`] if the request or decoding fails.
    pub async fn advanced_computer_search(
        &self,
        id: &ObjectId,
    ) -> Result<AdvancedComputerSearch, FetchError> {
        self.classic_get(&ADVANCED_COMPUTER_SEARCHES, id).await
    }
}
