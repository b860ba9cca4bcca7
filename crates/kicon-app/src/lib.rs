//! KICON Registration Application Orchestration Layer
//!
//! This crate contains the business logic use cases: the registration
//! wizard session, the payment presentation fetch, and the admin dashboard
//! client operations.

pub mod usecases;

pub use usecases::admin::{
    ExportRegistrationsCsv, FetchStats, ListRegistrations, UpdateRegistrationStatus,
};
pub use usecases::payment::{FetchPaymentDetails, PaymentView};
pub use usecases::wizard::{EmailCheckToken, SubmitOutcome, WizardSession};
