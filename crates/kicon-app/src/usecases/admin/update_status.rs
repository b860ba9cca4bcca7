//! Registration status updates from the dashboard table.

use std::sync::Arc;

use anyhow::{Context, Result};
use kicon_core::admin::{AdminSession, RegistrationRecord, RegistrationStatus};
use kicon_core::ports::RegistrationBackend;

pub struct UpdateRegistrationStatus {
    backend: Arc<dyn RegistrationBackend>,
}

impl UpdateRegistrationStatus {
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { backend }
    }

    /// Move one registration to a new lifecycle status and return the
    /// updated record for the table row.
    pub async fn execute(
        &self,
        session: &AdminSession,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<RegistrationRecord> {
        tracing::info!(
            admin = session.admin_name(),
            registration_id = id,
            status = status.as_str(),
            "updating registration status"
        );
        self.backend
            .update_status(id, status)
            .await
            .with_context(|| format!("failed to update status of registration {id}"))
    }
}
