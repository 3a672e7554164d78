//! Jamf Pro server coordinates and API client credentials.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default page size requested from paginated endpoints.
const fn default_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JamfConfig {
    /// Server host, e.g. `example.jamfcloud.com`. A scheme is optional.
    #[serde(default)]
    pub server: String,

    /// API client id used for the client-credentials token exchange.
    #[serde(default)]
    pub client_id: String,

    /// API client secret.
    #[serde(default)]
    pub client_secret: String,

    /// `page-size` sent to paginated endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for JamfConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            page_size: default_page_size(),
            timeout_secs: None,
        }
    }
}

impl JamfConfig {
    /// Report the first missing or invalid value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an empty server, client id or
    /// client secret, and [`ConfigError::InvalidValue`] for a zero page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("jamf.server", "ATLAS_JAMF__SERVER", self.server.trim()),
            ("jamf.client_id", "ATLAS_JAMF__CLIENT_ID", self.client_id.as_str()),
            (
                "jamf.client_secret",
                "ATLAS_JAMF__CLIENT_SECRET",
                self.client_secret.as_str(),
            ),
        ];
        for (field, env, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                    env: env.to_string(),
                });
            }
        }

        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "jamf.page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Server base URL with a scheme and no trailing slash.
    pub fn base_url(&self) -> String {
        let server = self.server.trim().trim_end_matches('/');
        if server.starts_with("https://") || server.starts_with("http://") {
            server.to_string()
        } else {
            format!("https://{server}")
        }
    }
}
