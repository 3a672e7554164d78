//! HTTP response helpers for the transport.

use crate::error::FetchError;

/// Longest response body kept in an [`FetchError::Api`] message.
const MAX_ERROR_BODY: usize = 512;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`FetchError::Api`] with the status code and (truncated) response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(FetchError::Api {
        status: status.as_u16(),
        message: truncate_body(&body),
    })
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(MAX_ERROR_BODY).collect();
    out.push('…');
    out
}
