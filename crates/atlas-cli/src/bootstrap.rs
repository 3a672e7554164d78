use std::time::Duration;

use anyhow::Context;
use atlas_client::transport::build_http_client;
use atlas_client::{ClientCredentials, HttpTransport, JamfClient, TokenProvider};
use atlas_config::AtlasConfig;

/// Load `.env`, the config files and `ATLAS_*` variables, then check that
/// the Jamf settings are usable. Runs before any network call.
pub fn load_config() -> anyhow::Result<AtlasConfig> {
    let config = AtlasConfig::load_with_dotenv().context("failed to load configuration")?;
    config
        .jamf
        .validate()
        .context("incomplete Jamf configuration")?;
    Ok(config)
}

/// Exchange the client credentials for a bearer token and build a client
/// bound to it.
pub async fn connect(config: &AtlasConfig) -> anyhow::Result<JamfClient<HttpTransport>> {
    let jamf = &config.jamf;
    let base_url = jamf.base_url();
    let http = build_http_client(jamf.timeout_secs.map(Duration::from_secs))
        .context("failed to build HTTP client")?;

    tracing::info!(server = %base_url, "authenticating");
    let token = ClientCredentials::new(
        http.clone(),
        base_url.clone(),
        jamf.client_id.clone(),
        jamf.client_secret.clone(),
    )
    .bearer_token()
    .await
    .with_context(|| format!("failed to authenticate against {base_url}"))?;

    let transport = HttpTransport::new(http, base_url, token);
    Ok(JamfClient::new(transport, jamf.page_size))
}
