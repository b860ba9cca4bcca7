//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of external dependencies.

pub mod backend;
pub mod errors;

pub use backend::{EmailCheck, RegistrationBackend, RegistrationReceipt};
pub use errors::{BackendError, SubmitError};
