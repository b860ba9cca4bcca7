//! One registration attempt: form state store, wizard controller, email
//! pre-check and submission pipeline.
//!
//! The session owns exactly one draft. Step transitions are gated by the
//! pure validator in `kicon-core`; the async side-effects (email check,
//! submission) run through the backend port and feed their outcomes back
//! into the wizard flags.

use std::sync::Arc;

use uuid::Uuid;

use kicon_core::ports::{BackendError, EmailCheck, RegistrationBackend, SubmitError};
use kicon_core::registration::{step_is_complete, DraftField, RegistrationDraft};
use kicon_core::{RegistrationPayload, WizardState, WizardStep};

/// Message shown when the submission call itself fails, as opposed to the
/// backend rejecting the record with its own message.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Handle for one in-flight email-uniqueness check.
///
/// Tokens are sequence-numbered per session; only the latest one may update
/// the wizard flags, so a slow response for an older email value can never
/// overwrite the result for a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCheckToken {
    seq: u64,
    email: String,
}

impl EmailCheckToken {
    /// The email value this check was issued for.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Result of one [`WizardSession::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the record; the attempt is now terminal.
    Completed { registration_id: String },
    /// Refused locally before any network traffic (gates not satisfied,
    /// already in flight, or already completed).
    Refused,
    /// The backend rejected the record or the call failed; the wizard stays
    /// on the review step and the user may correct and resubmit.
    Failed { message: String },
}

/// A single registration attempt.
pub struct WizardSession {
    backend: Arc<dyn RegistrationBackend>,
    draft: RegistrationDraft,
    state: WizardState,
    idempotency_key: String,
    email_check_seq: u64,
    last_error: Option<String>,
}

impl WizardSession {
    /// Start a fresh attempt: step 1, empty draft, new idempotency key.
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self {
            backend,
            draft: RegistrationDraft::default(),
            state: WizardState::default(),
            idempotency_key: Uuid::new_v4().to_string(),
            email_check_seq: 0,
            last_error: None,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The deduplication token sent with the submission payload.
    pub fn idempotency_key(&self) -> &str {
        &self.idempotency_key
    }

    /// The last user-facing submission failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one field edit. Ignored once the attempt has completed.
    pub fn set_field(&mut self, field: DraftField) {
        if self.state.is_terminal() {
            tracing::debug!("ignoring field edit on a completed attempt");
            return;
        }
        self.draft.set(field);
    }

    /// Converge an interest checkbox to the requested membership.
    pub fn toggle_interest(&mut self, name: &str, included: bool) {
        if self.state.is_terminal() {
            return;
        }
        self.draft.toggle_interest(name, included);
    }

    /// Whether the Next/Submit control for the current step is enabled.
    pub fn current_step_complete(&self) -> bool {
        step_is_complete(self.state.step, &self.draft, &self.state)
    }

    /// Advance one step. Returns whether the wizard moved; it stays put when
    /// the current step does not validate or is already the last.
    pub fn next(&mut self) -> bool {
        if !self.current_step_complete() {
            return false;
        }
        match self.state.step.next() {
            Some(step) => {
                self.state.step = step;
                true
            }
            None => false,
        }
    }

    /// Retreat one step. Always permitted from steps 2..4 and never touches
    /// the draft, so later-step input survives the detour.
    pub fn previous(&mut self) -> bool {
        match self.state.step.previous() {
            Some(step) => {
                self.state.step = step;
                true
            }
            None => false,
        }
    }

    /// React to the email field losing focus.
    ///
    /// Returns a token when a check should run, i.e. the field is non-empty
    /// and contains `@`. Issuing a new token invalidates all older ones.
    pub fn begin_email_check(&mut self) -> Option<EmailCheckToken> {
        if self.state.is_terminal() {
            return None;
        }
        let email = self.draft.email.trim();
        if email.is_empty() || !email.contains('@') {
            return None;
        }
        self.email_check_seq += 1;
        self.state.email_checking = true;
        Some(EmailCheckToken {
            seq: self.email_check_seq,
            email: email.to_string(),
        })
    }

    /// Feed a check outcome back into the wizard flags.
    ///
    /// Stale tokens are discarded: only the latest issued check is
    /// authoritative, regardless of arrival order. Errors fail open — the
    /// backend's own uniqueness constraint is the final arbiter.
    pub fn resolve_email_check(
        &mut self,
        token: &EmailCheckToken,
        outcome: Result<EmailCheck, BackendError>,
    ) {
        if token.seq != self.email_check_seq {
            tracing::debug!(
                email = token.email(),
                "discarding stale email check response"
            );
            return;
        }
        self.state.email_checking = false;
        self.state.email_exists = match outcome {
            Ok(check) => check.exists,
            Err(err) => {
                tracing::warn!(error = %err, "email pre-check failed, failing open");
                false
            }
        };
    }

    /// Convenience runner: begin a check, call the backend, resolve.
    pub async fn check_email(&mut self) -> bool {
        if let Some(token) = self.begin_email_check() {
            let outcome = self.backend.check_email(token.email()).await;
            self.resolve_email_check(&token, outcome);
        }
        self.state.email_exists
    }

    /// The submission pipeline.
    ///
    /// Refuses locally, without a network call, unless the wizard is on the
    /// review step with all gates open (`terms_accepted`, `!email_exists`,
    /// `!email_checking`) and no submission is in flight or completed. On
    /// success the attempt becomes terminal; on failure `submitting` resets
    /// and the wizard stays on the review step for a user-initiated retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.submitting || self.state.is_terminal() {
            tracing::debug!("ignoring duplicate submit");
            return SubmitOutcome::Refused;
        }
        if self.state.step != WizardStep::Review || !self.current_step_complete() {
            return SubmitOutcome::Refused;
        }

        let payload = match RegistrationPayload::from_draft(&self.draft, &self.idempotency_key) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "draft incomplete at submit time");
                return SubmitOutcome::Refused;
            }
        };

        self.state.submitting = true;

        match self.backend.submit_registration(&payload).await {
            Ok(receipt) => {
                // submitting stays frozen true: the attempt is terminal
                self.state.registration_id = Some(receipt.id.clone());
                self.last_error = None;
                tracing::info!(registration_id = %receipt.id, "registration completed");
                SubmitOutcome::Completed {
                    registration_id: receipt.id,
                }
            }
            Err(SubmitError::Rejected { message }) => {
                self.state.submitting = false;
                self.last_error = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
            Err(SubmitError::Backend(err)) => {
                self.state.submitting = false;
                tracing::warn!(error = %err, "registration submission failed");
                self.last_error = Some(NETWORK_FAILURE_MESSAGE.to_string());
                SubmitOutcome::Failed {
                    message: NETWORK_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}
