//! Registration wizard state machine
//!
//! Design principle: this is a pure type state machine with only state
//! definitions and transition helpers. Asynchronous behaviors (the email
//! pre-check, the submission call) are handled by the application layer,
//! which feeds their outcomes back into these flags.
//!
//! Step transitions:
//! ```text
//! Personal <-> Professional <-> Preferences <-> Review --submit--> (terminal)
//! ```
//! Forward movement goes one step at a time and must be gated by the step
//! validator; going back is always allowed and never touches the draft.

use serde::{Deserialize, Serialize};

/// The four wizard steps, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WizardStep {
    /// Step 1: personal and travel-document information
    Personal,
    /// Step 2: professional background and areas of interest
    Professional,
    /// Step 3: catering and assistance preferences
    Preferences,
    /// Step 4: package summary, terms, and submission
    Review,
}

impl WizardStep {
    /// 1-based step number as shown in the progress header.
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Professional => 2,
            Self::Preferences => 3,
            Self::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Professional => "Professional",
            Self::Preferences => "Preferences",
            Self::Review => "Payment",
        }
    }

    /// The following step, if any. No skipping.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Professional),
            Self::Professional => Some(Self::Preferences),
            Self::Preferences => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The preceding step, if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Professional => Some(Self::Personal),
            Self::Preferences => Some(Self::Professional),
            Self::Review => Some(Self::Preferences),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Personal
    }
}

/// Per-attempt wizard flags.
///
/// `email_checking`, `email_exists` and `submitting` are independent
/// booleans; `registration_id` is set exactly once, on submission success,
/// after which the attempt is terminal and `submitting` stays frozen true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub email_checking: bool,
    pub email_exists: bool,
    pub submitting: bool,
    pub registration_id: Option<String>,
}

impl WizardState {
    /// A completed attempt accepts no further edits or submissions.
    pub fn is_terminal(&self) -> bool {
        self.registration_id.is_some()
    }
}
