//! Wizard step machine and per-attempt state flags.

pub mod state;

pub use state::{WizardState, WizardStep};
