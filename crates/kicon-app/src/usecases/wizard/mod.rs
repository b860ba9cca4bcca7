//! The registration wizard use case.

pub mod session;

pub use session::{EmailCheckToken, SubmitOutcome, WizardSession, NETWORK_FAILURE_MESSAGE};
