//! Registration domain: draft record, field catalogs, per-step validation
//! and the wire payload sent to the backend.

pub mod catalog;
pub mod draft;
pub mod payload;
pub mod validator;

pub use catalog::{FoodPreference, Gender, Specialty, INTEREST_CATALOG};
pub use draft::{DraftField, RegistrationDraft};
pub use payload::RegistrationPayload;
pub use validator::{email_looks_valid, step_is_complete};
