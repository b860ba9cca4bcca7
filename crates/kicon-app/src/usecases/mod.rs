//! Business logic use cases
//!
//! One wizard session drives one registration attempt end to end:
//!
//! [WizardSession]
//!       │ field edits, step navigation, email pre-check
//!       ▼
//! submission pipeline ──success──► [FetchPaymentDetails] → confirmation view
//!
//! The admin use cases are independent of the wizard and require an
//! explicit [`kicon_core::admin::AdminSession`].

pub mod admin;
pub mod payment;
pub mod wizard;
