//! Admin dashboard use cases.
//!
//! Every operation takes an [`AdminSession`](kicon_core::admin::AdminSession)
//! reference. Obtaining one is the job of the authentication gate at the
//! application root; nothing here can run against the backend without it.

pub mod export_csv;
pub mod list_registrations;
pub mod stats;
pub mod update_status;

pub use export_csv::ExportRegistrationsCsv;
pub use list_registrations::ListRegistrations;
pub use stats::FetchStats;
pub use update_status::UpdateRegistrationStatus;
