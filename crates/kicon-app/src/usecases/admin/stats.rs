//! Dashboard summary numbers.

use std::sync::Arc;

use anyhow::{Context, Result};
use kicon_core::admin::{AdminSession, RegistrationStats};
use kicon_core::ports::RegistrationBackend;

pub struct FetchStats {
    backend: Arc<dyn RegistrationBackend>,
}

impl FetchStats {
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { backend }
    }

    /// Fetch the summary block. Numbers are displayed verbatim, including a
    /// negative `available_spots` when the backend reports overbooking.
    pub async fn execute(&self, session: &AdminSession) -> Result<RegistrationStats> {
        tracing::debug!(admin = session.admin_name(), "fetching dashboard stats");
        self.backend
            .registration_stats()
            .await
            .context("failed to fetch registration stats")
    }
}
