use crate::domain::model::{AvailabilityResult, CheckState};
use crate::domain::ports::AvailabilityLookup;
use crate::utils::error::{Result, SiteError};

/// Message shown when the lookup capability itself fails. No partial result
/// ever accompanies it.
pub const LOOKUP_FAILURE_MESSAGE: &str =
    "An error occurred while checking availability. Please try again.";

/// Proof that a submission was started. Settling with a token from a
/// superseded generation is a no-op, which is what discards results that
/// arrive after a `reset()` or a newer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckToken {
    generation: u64,
}

/// Owns the check-address workflow: input validation, exactly one lookup
/// invocation per submission, and the Idle → Checking → Resolved state the
/// host UI renders from.
///
/// The workflow is split into `begin` / `settle` so the host can run them
/// from separate event-handler turns; `check` drives a full round trip for
/// callers that await inline.
pub struct AvailabilityCheckEngine<L: AvailabilityLookup> {
    lookup: L,
    state: CheckState,
    last_error: Option<SiteError>,
    generation: u64,
}

impl<L: AvailabilityLookup> AvailabilityCheckEngine<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            state: CheckState::Idle,
            last_error: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &CheckState {
        &self.state
    }

    /// The failure behind the current generic message, if the last
    /// settlement was a lookup error. Cleared on the next submission.
    pub fn last_error(&self) -> Option<&SiteError> {
        self.last_error.as_ref()
    }

    /// Validates the address and transitions to Checking. The address is
    /// only trimmed for the emptiness check; the lookup receives it raw.
    pub fn begin(&mut self, address: &str) -> Result<CheckToken> {
        if self.state.is_checking() {
            // Single-flight: the contract forbids overlapping submissions.
            return Err(SiteError::ValidationError {
                message: "a check is already in progress".to_string(),
            });
        }
        if address.trim().is_empty() {
            return Err(SiteError::ValidationError {
                message: "empty address".to_string(),
            });
        }

        self.generation += 1;
        self.state = CheckState::Checking;
        self.last_error = None;
        tracing::debug!("Availability check started (generation {})", self.generation);
        Ok(CheckToken {
            generation: self.generation,
        })
    }

    /// Applies a lookup outcome. A stale token (reset or replaced since
    /// `begin`) is discarded silently and the state is left untouched.
    pub fn settle(&mut self, token: CheckToken, outcome: Result<AvailabilityResult>) {
        if token.generation != self.generation || !self.state.is_checking() {
            tracing::debug!(
                "Discarding stale lookup result (generation {} vs {})",
                token.generation,
                self.generation
            );
            return;
        }

        match outcome {
            Ok(result) => {
                self.state = CheckState::Resolved(result);
            }
            Err(e) => {
                tracing::warn!("Availability lookup failed: {}", e);
                self.state = CheckState::Resolved(AvailabilityResult {
                    available: false,
                    plans: vec![],
                    message: LOOKUP_FAILURE_MESSAGE.to_string(),
                });
                self.last_error = Some(e);
            }
        }
    }

    /// One full submission: validate, invoke the lookup exactly once, settle.
    /// Returns `Err` only for rejected input; a failing lookup resolves into
    /// the generic failure state instead of propagating. The returned state
    /// is an owned snapshot, so callers can keep it around while going back
    /// to the engine (for `last_error`, a reset, the next submission).
    pub async fn check(&mut self, address: &str) -> Result<CheckState> {
        let token = self.begin(address)?;
        let outcome = self.lookup.check(address).await;
        self.settle(token, outcome);
        Ok(self.state.clone())
    }

    /// Back to Idle, dropping any stored result or error. An outstanding
    /// lookup keeps running but its settlement will be discarded.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = CheckState::Idle;
        self.last_error = None;
    }
}
