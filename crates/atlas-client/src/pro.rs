//! Jamf Pro API endpoints (`api/<version>/...`).

use crate::error::FetchError;
use crate::models::ComputerPrestage;
use crate::pagination::fetch_all;
use crate::transport::Transport;
use crate::JamfClient;

impl<T: Transport> JamfClient<T> {
    fn pro_path(version: &str, path: &str) -> String {
        format!("api/{version}/{path}")
    }

    /// All computer prestages, across every page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if any page request or decoding fails.
    pub async fn computer_prestages(&self) -> Result<Vec<ComputerPrestage>, FetchError> {
        let path = Self::pro_path("v3", "computer-prestages");
        fetch_all(&self.transport, &path, &[("page-size", self.page_size.to_string())]).await
    }
}
