//! Client error types.

use thiserror::Error;

/// Errors raised while fetching objects from the server.
///
/// Every variant is terminal: callers abort the whole run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body or description.
        message: String,
    },

    /// The response was not JSON or did not have the expected shape.
    #[error("parse error for {path}: {message}")]
    Parse { path: String, message: String },

    /// A page came back empty before `totalCount` records were collected.
    #[error("pagination stalled on {path} at page {page}: {received} of {total} records")]
    Pagination {
        path: String,
        page: usize,
        received: usize,
        total: usize,
    },
}

impl FetchError {
    pub(crate) fn parse(path: &str, message: impl ToString) -> Self {
        Self::Parse {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors raised by the credential exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request rejected: {0}")]
    Rejected(String),

    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}
