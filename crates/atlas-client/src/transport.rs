//! Request transport.
//!
//! [`Transport`] is the only seam between the API client and the network:
//! it takes a path relative to the server root (query string included) and
//! returns the parsed JSON body. [`HttpTransport`] is the reqwest-backed
//! implementation; tests use `MockTransport`.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::error::FetchError;
use crate::http::check_response;

/// Issues authenticated GET requests and parses JSON bodies.
pub trait Transport {
    /// GET `path_and_query` (relative to the server root).
    ///
    /// Any transport failure, non-success status or invalid JSON is an error.
    fn get_json(
        &self,
        path_and_query: &str,
    ) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Build the shared reqwest client.
///
/// # Errors
///
/// Returns [`FetchError::Http`] if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, FetchError> {
    let mut builder =
        reqwest::Client::builder().user_agent(concat!("atlas/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Percent-encode `key=value` pairs joined with `&`.
#[must_use]
pub fn encode_pairs(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append a query string to `path`, leaving it untouched when there are no
/// parameters.
#[must_use]
pub fn join_url_with_params(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    format!("{path}?{}", encode_pairs(params))
}

/// Bearer-token transport over reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}/{}", self.base_url, path_and_query.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, path_and_query: &str) -> Result<Value, FetchError> {
        let url = self.url(path_and_query);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        json_from_response(path_and_query, resp).await
    }
}

/// Parse a response body as JSON once the status has been checked.
///
/// # Errors
///
/// Returns [`FetchError::Api`] for a non-success status and
/// [`FetchError::Parse`] naming `path` when the body is not JSON.
pub async fn json_from_response(path: &str, resp: reqwest::Response) -> Result<Value, FetchError> {
    let body = check_response(resp).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| FetchError::parse(path, e))
}
