//! # atlas-client
//!
//! Jamf Pro API client for Atlas.
//!
//! - [`auth`]: client-credentials token exchange behind [`TokenProvider`]
//! - [`transport`]: the [`Transport`] seam and its reqwest implementation
//! - [`pagination`]: page accumulation for v3 collections
//! - [`classic`] / [`pro`]: typed endpoints on [`JamfClient`]
//!
//! All requests are issued one at a time; nothing is retried.

pub mod auth;
pub mod classic;
pub mod models;
pub mod pagination;
pub mod pro;
pub mod transport;

mod error;
mod http;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use auth::{ClientCredentials, TokenProvider};
pub use error::{AuthError, FetchError};
pub use transport::{HttpTransport, Transport};

/// Typed access to the classic and Pro APIs of one server.
pub struct JamfClient<T> {
    transport: T,
    page_size: u32,
}

impl<T: Transport> JamfClient<T> {
    /// Wrap a transport. `page_size` is sent to paginated endpoints.
    #[must_use]
    pub const fn new(transport: T, page_size: u32) -> Self {
        Self {
            transport,
            page_size,
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
