//! # kicon-core
//!
//! Core domain models and business logic for the KICON registration client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod admin;
pub mod config;
pub mod payment;
pub mod ports;
pub mod registration;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::ClientConfig;
pub use registration::{
    DraftField, FoodPreference, Gender, RegistrationDraft, RegistrationPayload, Specialty,
};
pub use wizard::{WizardState, WizardStep};
