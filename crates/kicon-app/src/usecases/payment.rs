//! Payment presentation for the confirmation screen.

use std::sync::Arc;

use kicon_core::payment::PaymentInfo;
use kicon_core::ports::RegistrationBackend;

/// What the confirmation screen renders for the payment section.
///
/// Fetch failures are a first-class state rather than a silently empty
/// section, so the attendee always either sees the wiring details or an
/// explicit pointer to the organizers.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentView {
    Loading,
    Ready(PaymentInfo),
    Unavailable { message: String },
}

/// Message shown when the bank details cannot be fetched.
pub const PAYMENT_UNAVAILABLE_MESSAGE: &str =
    "Payment details are currently unavailable. Please contact the organizers.";

/// Fetch payment details use case
pub struct FetchPaymentDetails {
    backend: Arc<dyn RegistrationBackend>,
}

impl FetchPaymentDetails {
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { backend }
    }

    /// Resolve the payment section for a completed registration.
    ///
    /// Never fails: errors collapse into [`PaymentView::Unavailable`] and the
    /// registration itself stays completed either way.
    pub async fn execute(&self) -> PaymentView {
        match self.backend.fetch_bank_details().await {
            Ok(info) => PaymentView::Ready(info),
            Err(err) => {
                tracing::warn!(error = %err, "bank details fetch failed");
                PaymentView::Unavailable {
                    message: PAYMENT_UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        }
    }
}
