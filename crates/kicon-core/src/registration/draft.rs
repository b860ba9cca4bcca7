//! The in-progress registration record.
//!
//! Exactly one draft exists per wizard session. It lives in memory only and
//! is discarded once submission succeeds or the session ends.

use chrono::NaiveDate;

use super::catalog::{FoodPreference, Gender, Specialty, INTEREST_CATALOG};

/// All field values collected across the four wizard steps.
///
/// Free-text fields keep whatever the user typed; enum-backed fields are
/// `None` until a catalog value is picked. `years_of_practice` stays a raw
/// string because it is entered as text and only parsed at validation and
/// submission time.
///
/// The draft is never persisted; it exists only for the lifetime of one
/// wizard session, so it carries no serde derives.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    // Personal information
    pub full_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    pub passport_number: String,
    pub passport_expiry: Option<NaiveDate>,
    pub mobile: String,
    pub email: String,

    // Professional information
    pub specialty: Option<Specialty>,
    pub years_of_practice: String,
    pub clinic_name: String,
    pub clinic_address: String,
    pub company: String,
    pub designation: String,
    pub interests: Vec<&'static str>,
    pub mou: bool,

    // Preferences
    pub food_preference: Option<FoodPreference>,
    pub emergency_contact: String,
    pub allergies: String,
    pub special_assistance: bool,

    // Agreement
    pub terms_accepted: bool,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            gender: None,
            date_of_birth: None,
            // Pre-filled: the convention's delegates register from India
            nationality: "India".to_string(),
            passport_number: String::new(),
            passport_expiry: None,
            mobile: String::new(),
            email: String::new(),
            specialty: None,
            years_of_practice: String::new(),
            clinic_name: String::new(),
            clinic_address: String::new(),
            company: String::new(),
            designation: String::new(),
            interests: Vec::new(),
            mou: false,
            food_preference: None,
            emergency_contact: String::new(),
            allergies: String::new(),
            special_assistance: false,
            terms_accepted: false,
        }
    }
}

/// A single field update, applied by [`RegistrationDraft::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    FullName(String),
    Gender(Gender),
    DateOfBirth(NaiveDate),
    Nationality(String),
    PassportNumber(String),
    PassportExpiry(NaiveDate),
    Mobile(String),
    Email(String),
    Specialty(Specialty),
    YearsOfPractice(String),
    ClinicName(String),
    ClinicAddress(String),
    Company(String),
    Designation(String),
    Mou(bool),
    FoodPreference(FoodPreference),
    EmergencyContact(String),
    Allergies(String),
    SpecialAssistance(bool),
    TermsAccepted(bool),
}

impl RegistrationDraft {
    /// Apply one field update.
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::FullName(v) => self.full_name = v,
            DraftField::Gender(v) => self.gender = Some(v),
            DraftField::DateOfBirth(v) => self.date_of_birth = Some(v),
            DraftField::Nationality(v) => self.nationality = v,
            DraftField::PassportNumber(v) => self.passport_number = v,
            DraftField::PassportExpiry(v) => self.passport_expiry = Some(v),
            DraftField::Mobile(v) => self.mobile = v,
            DraftField::Email(v) => self.email = v,
            DraftField::Specialty(v) => self.specialty = Some(v),
            DraftField::YearsOfPractice(v) => self.years_of_practice = v,
            DraftField::ClinicName(v) => self.clinic_name = v,
            DraftField::ClinicAddress(v) => self.clinic_address = v,
            DraftField::Company(v) => self.company = v,
            DraftField::Designation(v) => self.designation = v,
            DraftField::Mou(v) => self.mou = v,
            DraftField::FoodPreference(v) => self.food_preference = Some(v),
            DraftField::EmergencyContact(v) => self.emergency_contact = v,
            DraftField::Allergies(v) => self.allergies = v,
            DraftField::SpecialAssistance(v) => self.special_assistance = v,
            DraftField::TermsAccepted(v) => self.terms_accepted = v,
        }
    }

    /// Converge the interest set to the requested membership.
    ///
    /// Set semantics: no duplicates, display order preserved. Toggling to a
    /// membership the set already has is a no-op, so the operation is
    /// idempotent. Labels outside the catalog are ignored.
    pub fn toggle_interest(&mut self, name: &str, included: bool) {
        let Some(label) = INTEREST_CATALOG.iter().find(|l| **l == name) else {
            tracing::debug!(interest = name, "ignoring unknown interest label");
            return;
        };
        let present = self.interests.contains(label);
        match (included, present) {
            (true, false) => self.interests.push(label),
            (false, true) => self.interests.retain(|l| l != label),
            _ => {}
        }
    }
}
