//! Client-credentials token exchange.
//!
//! `POST /api/oauth/token` with `client_id`, `client_secret` and
//! `grant_type=client_credentials`; the bearer token is the `access_token`
//! field of the JSON response.

use std::future::Future;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::error::AuthError;
use crate::transport::encode_pairs;

/// Source of the bearer token sent with every API request.
pub trait TokenProvider {
    fn bearer_token(&self) -> impl Future<Output = Result<String, AuthError>> + Send;
}

/// API client credentials for one server.
pub struct ClientCredentials {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    fn form_body(&self) -> String {
        encode_pairs(&[
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
            ("grant_type", "client_credentials".to_string()),
        ])
    }
}

impl TokenProvider for ClientCredentials {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        let url = format!("{}/api/oauth/token", self.base_url);
        tracing::debug!(%url, "requesting access token");

        let resp = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(self.form_body())
            .send()
            .await
            .map_err(|e| AuthError::Rejected(e.to_string()))?;

        token_from_response(resp).await
    }
}

/// Read the bearer token out of a token endpoint response.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for a non-success status and
/// [`AuthError::MalformedResponse`] when the body is not JSON or carries no
/// usable `access_token`.
pub async fn token_from_response(resp: reqwest::Response) -> Result<String, AuthError> {
    let resp = resp
        .error_for_status()
        .map_err(|e| AuthError::Rejected(e.to_string()))?;
    let body = resp
        .json::<Value>()
        .await
        .map_err(|e| AuthError::MalformedResponse(format!("parse token response: {e}")))?;

    parse_access_token(&body)
}

/// Extract a non-empty `access_token` from a token response.
///
/// # Errors
///
/// Returns [`AuthError::MalformedResponse`] when the field is missing, not a
/// string, or empty.
pub fn parse_access_token(body: &Value) -> Result<String, AuthError> {
    body.get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AuthError::MalformedResponse("response missing 'access_token'".into()))
}
