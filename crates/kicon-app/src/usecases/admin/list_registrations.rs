//! Paginated registration listing for the dashboard table.

use std::sync::Arc;

use anyhow::{Context, Result};
use kicon_core::admin::{AdminSession, RegistrationPage, RegistrationQuery};
use kicon_core::ports::RegistrationBackend;

pub struct ListRegistrations {
    backend: Arc<dyn RegistrationBackend>,
}

impl ListRegistrations {
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { backend }
    }

    pub async fn execute(
        &self,
        session: &AdminSession,
        query: RegistrationQuery,
    ) -> Result<RegistrationPage> {
        tracing::debug!(
            admin = session.admin_name(),
            skip = query.skip,
            limit = query.limit,
            "listing registrations"
        );
        let page = self
            .backend
            .list_registrations(&query)
            .await
            .context("failed to list registrations")?;
        Ok(page)
    }
}
