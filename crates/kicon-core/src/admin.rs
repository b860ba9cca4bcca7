//! Admin dashboard domain: stored registration records, list queries,
//! dashboard statistics, and the explicit admin session object.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registration::{FoodPreference, Gender, Specialty};

/// Lifecycle status of a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RegistrationStatus {
    /// Wire form, as used in query strings and update bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Payment progress of a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    AdvancePaid,
    FullPaid,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::AdvancePaid => "advance_paid",
            Self::FullPaid => "full_paid",
        }
    }
}

/// A registration as stored by the backend.
///
/// Timestamps come back as naive ISO instants (the backend serializes UTC
/// without an offset marker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: String,
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDateTime,
    pub nationality: String,
    pub passport_number: String,
    pub passport_expiry: NaiveDateTime,
    pub mobile: String,
    pub email: String,
    pub specialty: Specialty,
    pub years_of_practice: u32,
    pub clinic_name: String,
    pub clinic_address: String,
    #[serde(default)]
    pub company: Option<String>,
    pub designation: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub mou: bool,
    pub food_preference: FoodPreference,
    pub emergency_contact: String,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub special_assistance: bool,
    pub registration_status: RegistrationStatus,
    pub payment_status: PaymentStatus,
    pub terms_accepted: bool,
    pub registration_date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
}

/// Pagination and status filter for the admin listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationQuery {
    pub skip: u32,
    pub limit: u32,
    pub status: Option<RegistrationStatus>,
}

impl Default for RegistrationQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            status: None,
        }
    }
}

/// One page of the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPage {
    pub rows: Vec<RegistrationRecord>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusCounts {
    pub pending: u64,
    pub confirmed: u64,
    pub cancelled: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpecialtyCounts {
    pub dermatology: u64,
    pub dentistry: u64,
    pub cosmetology: u64,
    pub other: u64,
}

/// Dashboard summary numbers, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationStats {
    pub total_registrations: u64,
    pub active_registrations: u64,
    pub available_spots: i64,
    pub registration_limit: u64,
    pub by_status: StatusCounts,
    pub by_specialty: SpecialtyCounts,
    /// ISO instant string; shown as-is, never reinterpreted client-side.
    pub registration_deadline: String,
    pub deadline_passed: bool,
}

/// Authenticated admin context.
///
/// Created by the root authentication gate and passed down by value to every
/// admin use case. Replaces the ambient login flag of the legacy dashboard;
/// a real token-based session would slot in behind the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    admin_name: String,
    signed_in_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(admin_name: impl Into<String>) -> Self {
        Self {
            admin_name: admin_name.into(),
            signed_in_at: Utc::now(),
        }
    }

    pub fn admin_name(&self) -> &str {
        &self.admin_name
    }

    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}
