//! Fixed field catalogs offered by the registration form.
//!
//! Wire values are the lower-cased label forms the backend stores; the
//! `label()` forms are what the form displays.

use serde::{Deserialize, Serialize};

/// Registrant gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Medical specialty catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "dermatology")]
    Dermatology,
    #[serde(rename = "dentistry")]
    Dentistry,
    #[serde(rename = "cosmetology")]
    Cosmetology,
    #[serde(rename = "plastic surgery")]
    PlasticSurgery,
    #[serde(rename = "aesthetic medicine")]
    AestheticMedicine,
    #[serde(rename = "general practice")]
    GeneralPractice,
    #[serde(rename = "other")]
    Other,
}

impl Specialty {
    pub const ALL: [Self; 7] = [
        Self::Dermatology,
        Self::Dentistry,
        Self::Cosmetology,
        Self::PlasticSurgery,
        Self::AestheticMedicine,
        Self::GeneralPractice,
        Self::Other,
    ];

    /// Wire form: the lower-cased label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dermatology => "dermatology",
            Self::Dentistry => "dentistry",
            Self::Cosmetology => "cosmetology",
            Self::PlasticSurgery => "plastic surgery",
            Self::AestheticMedicine => "aesthetic medicine",
            Self::GeneralPractice => "general practice",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dermatology => "Dermatology",
            Self::Dentistry => "Dentistry",
            Self::Cosmetology => "Cosmetology",
            Self::PlasticSurgery => "Plastic Surgery",
            Self::AestheticMedicine => "Aesthetic Medicine",
            Self::GeneralPractice => "General Practice",
            Self::Other => "Other",
        }
    }
}

/// Catering preference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPreference {
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "non-vegetarian")]
    NonVegetarian,
    #[serde(rename = "both")]
    Both,
}

impl FoodPreference {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Both => "Both",
        }
    }
}

/// "Areas of Interest" checkbox labels, in form display order.
pub const INTEREST_CATALOG: [&str; 9] = [
    "Dental Equipment",
    "Skincare Devices",
    "Cosmetic Products",
    "Aesthetic Threads",
    "Korean Implants",
    "Hi-tech Dental Chairs",
    "NMN/NAD+ Products",
    "Anti-wrinkle Treatments",
    "Medical Technology",
];
