//! Client configuration domain model

use serde::{Deserialize, Serialize};

/// Client configuration
///
/// The wizard exposes no surface of its own beyond the backend base URL and
/// an HTTP timeout; both are injected by the hosting shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the registration backend, without the `/api` suffix
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            request_timeout_secs: 30,
        }
    }
}
