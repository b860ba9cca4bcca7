//! Wire payload for `POST /api/registrations`.
//!
//! Field names are the backend's camelCase contract. Calendar dates are
//! transmitted with a fixed midnight-UTC time component so the backend never
//! sees a timezone-ambiguous instant.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::catalog::{FoodPreference, Gender, Specialty};
use super::draft::RegistrationDraft;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("required field missing or malformed: {0}")]
    Incomplete(&'static str),
}

/// The record as the backend expects it.
///
/// Optional strings (`company`, `allergies`) are sent as empty strings, not
/// omitted; the backend contract treats absence and emptiness differently.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub gender: Gender,
    #[serde(serialize_with = "midnight_utc")]
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub passport_number: String,
    #[serde(serialize_with = "midnight_utc")]
    pub passport_expiry: NaiveDate,
    pub mobile: String,
    pub email: String,
    pub specialty: Specialty,
    pub years_of_practice: u32,
    pub clinic_name: String,
    pub clinic_address: String,
    pub company: String,
    pub designation: String,
    pub interests: Vec<String>,
    pub mou: bool,
    pub food_preference: FoodPreference,
    pub emergency_contact: String,
    pub allergies: String,
    pub special_assistance: bool,
    pub terms_accepted: bool,
    /// Client-minted deduplication token, one per wizard session.
    pub idempotency_key: String,
}

fn midnight_utc<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")))
}

impl RegistrationPayload {
    /// Transform a completed draft into the wire record.
    ///
    /// Callers gate on the step validator first; an incomplete draft is a
    /// programming error surfaced as a typed refusal, never a panic.
    pub fn from_draft(
        draft: &RegistrationDraft,
        idempotency_key: &str,
    ) -> Result<Self, PayloadError> {
        let gender = draft.gender.ok_or(PayloadError::Incomplete("gender"))?;
        let date_of_birth = draft
            .date_of_birth
            .ok_or(PayloadError::Incomplete("dateOfBirth"))?;
        let passport_expiry = draft
            .passport_expiry
            .ok_or(PayloadError::Incomplete("passportExpiry"))?;
        let specialty = draft
            .specialty
            .ok_or(PayloadError::Incomplete("specialty"))?;
        let food_preference = draft
            .food_preference
            .ok_or(PayloadError::Incomplete("foodPreference"))?;
        let years_of_practice = draft
            .years_of_practice
            .trim()
            .parse::<u32>()
            .map_err(|_| PayloadError::Incomplete("yearsOfPractice"))?;

        Ok(Self {
            full_name: draft.full_name.clone(),
            gender,
            date_of_birth,
            nationality: draft.nationality.clone(),
            passport_number: draft.passport_number.clone(),
            passport_expiry,
            mobile: draft.mobile.clone(),
            email: draft.email.clone(),
            specialty,
            years_of_practice,
            clinic_name: draft.clinic_name.clone(),
            clinic_address: draft.clinic_address.clone(),
            company: draft.company.clone(),
            designation: draft.designation.clone(),
            interests: draft.interests.iter().map(|s| s.to_string()).collect(),
            mou: draft.mou,
            food_preference,
            emergency_contact: draft.emergency_contact.clone(),
            allergies: draft.allergies.clone(),
            special_assistance: draft.special_assistance,
            terms_accepted: draft.terms_accepted,
            idempotency_key: idempotency_key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::draft::DraftField;
    use chrono::NaiveDate;

    fn filled_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::default();
        for field in [
            DraftField::FullName("Jane Doe".into()),
            DraftField::Gender(Gender::Female),
            DraftField::DateOfBirth(NaiveDate::from_ymd_opt(1985, 4, 10).unwrap()),
            DraftField::PassportNumber("P1234567".into()),
            DraftField::PassportExpiry(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
            DraftField::Mobile("+919999999999".into()),
            DraftField::Email("jane@example.com".into()),
            DraftField::Specialty(Specialty::Dermatology),
            DraftField::YearsOfPractice(" 10 ".into()),
            DraftField::ClinicName("Smile Clinic".into()),
            DraftField::ClinicAddress("12 MG Road, New Delhi".into()),
            DraftField::Designation("Senior Consultant".into()),
            DraftField::FoodPreference(FoodPreference::Vegetarian),
            DraftField::EmergencyContact("+918888888888".into()),
            DraftField::TermsAccepted(true),
        ] {
            draft.set(field);
        }
        draft.toggle_interest("Dental Equipment", true);
        draft
    }

    #[test]
    fn test_dates_get_fixed_midnight_utc_suffix() {
        let payload = RegistrationPayload::from_draft(&filled_draft(), "key-1").unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["dateOfBirth"], "1985-04-10T00:00:00.000Z");
        assert_eq!(json["passportExpiry"], "2030-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_field_names_are_camel_case_and_optionals_are_empty_strings() {
        let payload = RegistrationPayload::from_draft(&filled_draft(), "key-1").unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["yearsOfPractice"], 10);
        assert_eq!(json["specialty"], "dermatology");
        assert_eq!(json["foodPreference"], "vegetarian");
        // optional strings are present and empty, not omitted
        assert_eq!(json["company"], "");
        assert_eq!(json["allergies"], "");
        assert_eq!(json["idempotencyKey"], "key-1");
        assert_eq!(json["interests"][0], "Dental Equipment");
    }

    #[test]
    fn test_incomplete_draft_is_a_typed_refusal() {
        let mut draft = filled_draft();
        draft.gender = None;
        assert_eq!(
            RegistrationPayload::from_draft(&draft, "key-1"),
            Err(PayloadError::Incomplete("gender"))
        );

        let mut draft = filled_draft();
        draft.years_of_practice = "ten".into();
        assert_eq!(
            RegistrationPayload::from_draft(&draft, "key-1"),
            Err(PayloadError::Incomplete("yearsOfPractice"))
        );
    }
}

