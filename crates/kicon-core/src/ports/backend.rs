//! Registration backend port
//!
//! The single outbound contract of the client. Implementations live in the
//! infrastructure layer (HTTP adapter); tests provide scripted mocks.

use async_trait::async_trait;

use crate::admin::{
    RegistrationPage, RegistrationQuery, RegistrationRecord, RegistrationStats,
    RegistrationStatus,
};
use crate::payment::PaymentInfo;
use crate::registration::RegistrationPayload;

use super::errors::{BackendError, SubmitError};

/// Result of the email-uniqueness pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailCheck {
    pub exists: bool,
}

/// Successful submission acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub id: String,
    pub message: Option<String>,
}

#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// `GET /api/registrations/email/{email}`
    async fn check_email(&self, email: &str) -> Result<EmailCheck, BackendError>;

    /// `POST /api/registrations`
    async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationReceipt, SubmitError>;

    /// `GET /api/payments/bank-details`
    async fn fetch_bank_details(&self) -> Result<PaymentInfo, BackendError>;

    /// `GET /api/registrations` (admin)
    async fn list_registrations(
        &self,
        query: &RegistrationQuery,
    ) -> Result<RegistrationPage, BackendError>;

    /// `GET /api/registrations/stats/summary` (admin)
    async fn registration_stats(&self) -> Result<RegistrationStats, BackendError>;

    /// `PUT /api/registrations/{id}` with a status-only body (admin)
    async fn update_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<RegistrationRecord, BackendError>;
}
