//! Per-step completeness rules.
//!
//! Pure functions over `(step, draft, state)`. A failed check never raises;
//! it only keeps the Next/Submit action disabled, so partial-step
//! submission is impossible.

use crate::wizard::{WizardState, WizardStep};

use super::draft::RegistrationDraft;

/// Minimal address-shape check: non-empty local part, one `@`, and a domain
/// containing a dot with non-empty labels. The backend's own validation is
/// the final arbiter.
pub fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

fn years_of_practice_ok(raw: &str) -> bool {
    // Parses to a non-negative integer; u32 already excludes signs.
    raw.trim().parse::<u32>().is_ok()
}

/// Whether the given step's required fields are populated and well-formed.
///
/// Step 2 deliberately does not require a non-empty interest set even though
/// the form labels "Areas of Interest" as required; the business rule was
/// flagged ambiguous and the observed leniency is preserved.
pub fn step_is_complete(
    step: WizardStep,
    draft: &RegistrationDraft,
    state: &WizardState,
) -> bool {
    match step {
        WizardStep::Personal => {
            !draft.full_name.trim().is_empty()
                && draft.gender.is_some()
                && draft.date_of_birth.is_some()
                && !draft.nationality.trim().is_empty()
                && !draft.passport_number.trim().is_empty()
                && draft.passport_expiry.is_some()
                && !draft.mobile.trim().is_empty()
                && email_looks_valid(&draft.email)
        }
        WizardStep::Professional => {
            draft.specialty.is_some()
                && years_of_practice_ok(&draft.years_of_practice)
                && !draft.clinic_name.trim().is_empty()
                && !draft.clinic_address.trim().is_empty()
                && !draft.designation.trim().is_empty()
        }
        WizardStep::Preferences => {
            draft.food_preference.is_some() && !draft.emergency_contact.trim().is_empty()
        }
        WizardStep::Review => {
            draft.terms_accepted
                && !state.email_exists
                && !state.email_checking
                && !state.submitting
        }
    }
}
