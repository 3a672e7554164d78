//! In-memory [`Transport`] for tests.
//!
//! Responses are keyed by the exact path-and-query string the client
//! requests. Every request is recorded, including failed ones, so tests can
//! assert on request counts and order.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::error::FetchError;
use crate::transport::Transport;

#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, Value>,
    failures: HashMap<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path_and_query`.
    #[must_use]
    pub fn with(mut self, path_and_query: impl Into<String>, body: Value) -> Self {
        self.insert(path_and_query, body);
        self
    }

    pub fn insert(&mut self, path_and_query: impl Into<String>, body: Value) {
        self.responses.insert(path_and_query.into(), body);
    }

    /// Answer `path_and_query` with an API error of the given status.
    #[must_use]
    pub fn failing(mut self, path_and_query: impl Into<String>, status: u16) -> Self {
        self.failures.insert(path_and_query.into(), status);
        self
    }

    /// Every requested path, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Transport for MockTransport {
    async fn get_json(&self, path_and_query: &str) -> Result<Value, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path_and_query.to_string());

        if let Some(status) = self.failures.get(path_and_query) {
            return Err(FetchError::Api {
                status: *status,
                message: format!("mock failure for {path_and_query}"),
            });
        }

        self.responses
            .get(path_and_query)
            .cloned()
            .ok_or_else(|| FetchError::Api {
                status: 404,
                message: format!("no mock response for {path_and_query}"),
            })
    }
}
