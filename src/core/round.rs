use crate::core::selection::{transition, RoundPhase, SelectionEvent, SelectionState};
use crate::core::{FinalizationOutcome, FinalizeSink, SuggestionBackend, SuggestionResult};
use crate::domain::model::ValidInput;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::validate_submission;
use std::sync::Mutex;

/// Feedback presented when the finalize service could not be reached at
/// all. The selection survives, so the user can simply retry.
const FINALIZE_UNREACHABLE_MESSAGE: &str =
    "The finalize service could not be reached. Your selection has been kept; please try again.";

/// Orchestrates one suggestion round: validate the submission, request
/// candidates, track the user's selection, commit it through the finalize
/// sink. Owns the selection state exclusively; the mutex only serves the
/// `&self` async API and is never held across an await.
pub struct RoundController<S, F> {
    backend: S,
    sink: F,
    state: Mutex<RoundState>,
}

#[derive(Debug, Default)]
struct RoundState {
    selection: SelectionState,
    /// Sequence number of the most recently issued suggestion request.
    /// Responses carrying an older number are discarded: last-issued wins,
    /// not last-resolved.
    issued_seq: u64,
    submit_pending: bool,
    /// The submission that produced the currently active candidates.
    /// Forgotten after a successful commit, mirroring the form reset.
    active_input: Option<ValidInput>,
    issued_input: Option<ValidInput>,
}

impl<S, F> RoundController<S, F>
where
    S: SuggestionBackend,
    F: FinalizeSink,
{
    pub fn new(backend: S, sink: F) -> Self {
        Self {
            backend,
            sink,
            state: Mutex::new(RoundState::default()),
        }
    }

    /// Validates both descriptions and requests suggestions. Only one
    /// submit may be in flight at a time; a second one is rejected rather
    /// than queued. A validation failure issues no request. On success the
    /// previous round's candidates are replaced and the selection resets;
    /// on failure they are left untouched.
    pub async fn submit(&self, client_interest: &str, vendor_capability: &str) -> Result<()> {
        let input = validate_submission(client_interest, vendor_capability)?;

        let seq = {
            let mut guard = self.state.lock().unwrap();
            if guard.submit_pending {
                return Err(MatchError::SubmitInFlightError);
            }
            guard.submit_pending = true;
            stage_request(&mut guard, &input)
        };

        tracing::debug!(seq, "requesting suggestions");
        let outcome = self.backend.request_suggestions(&input).await;

        let mut guard = self.state.lock().unwrap();
        guard.submit_pending = false;
        match outcome {
            Ok(result) => {
                let applied = accept_result(&mut guard, seq, result)?;
                if applied {
                    tracing::info!(
                        count = guard.selection.candidates().map(|c| c.candidate_count()),
                        "suggestions received"
                    );
                } else {
                    tracing::debug!(seq, "suggestion response superseded, discarded");
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "suggestion request failed");
                Err(e)
            }
        }
    }

    /// Allocates a sequence number for a suggestion request the caller
    /// will run itself. Pair with [`apply_result`](Self::apply_result);
    /// [`submit`](Self::submit) is built on the same pair and is the right
    /// entry point unless the presentation layer schedules its own
    /// futures.
    pub fn begin_request(&self, input: &ValidInput) -> u64 {
        let mut guard = self.state.lock().unwrap();
        stage_request(&mut guard, input)
    }

    /// Applies a suggestion response for the request tagged `seq`. Returns
    /// `Ok(false)` when a newer request has superseded it, in which case
    /// the response is discarded and the active state is untouched.
    pub fn apply_result(&self, seq: u64, result: SuggestionResult) -> Result<bool> {
        let mut guard = self.state.lock().unwrap();
        accept_result(&mut guard, seq, result)
    }

    /// Ticks or unticks a candidate title. Unknown titles are ignored.
    pub fn toggle(&self, title: &str, included: bool) {
        let mut guard = self.state.lock().unwrap();
        let _ = apply_event(
            &mut guard,
            SelectionEvent::Toggle {
                title: title.to_string(),
                included,
            },
        );
    }

    /// Abandons the round without committing. No network call.
    pub fn cancel(&self) -> Result<()> {
        let mut guard = self.state.lock().unwrap();
        apply_event(&mut guard, SelectionEvent::Cancel)
    }

    /// Commits the current selection. Fails locally when nothing is
    /// selected or a commit is already in flight; in both cases no request
    /// is issued. Transport failures are translated into a failed outcome
    /// with a generic message, so callers handle a single feedback shape;
    /// either way a failed commit returns the round to its presenting
    /// state with the selection intact.
    pub async fn finalize(&self) -> Result<FinalizationOutcome> {
        let titles = {
            let mut guard = self.state.lock().unwrap();
            apply_event(&mut guard, SelectionEvent::RequestFinalize)?;
            guard.selection.selected_titles().to_vec()
        };

        tracing::info!(count = titles.len(), "finalizing selection");
        match self.sink.finalize(&titles).await {
            Ok(outcome) => {
                let mut guard = self.state.lock().unwrap();
                let _ = apply_event(
                    &mut guard,
                    SelectionEvent::Outcome {
                        success: outcome.success,
                    },
                );
                if outcome.success {
                    guard.active_input = None;
                    tracing::info!(message = %outcome.message, "selection committed");
                } else {
                    tracing::warn!(message = %outcome.message, "finalize rejected");
                }
                Ok(outcome)
            }
            Err(e) => {
                let mut guard = self.state.lock().unwrap();
                let _ = apply_event(&mut guard, SelectionEvent::Outcome { success: false });
                tracing::warn!(error = %e, "finalize request failed");
                Ok(FinalizationOutcome {
                    success: false,
                    message: FINALIZE_UNREACHABLE_MESSAGE.to_string(),
                })
            }
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.lock().unwrap().selection.phase()
    }

    pub fn candidates(&self) -> Option<SuggestionResult> {
        self.state.lock().unwrap().selection.candidates().cloned()
    }

    pub fn selected_titles(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .selection
            .selected_titles()
            .to_vec()
    }

    /// The submission whose candidates are currently active, if the round
    /// has not been committed yet.
    pub fn active_input(&self) -> Option<ValidInput> {
        self.state.lock().unwrap().active_input.clone()
    }
}

fn stage_request(state: &mut RoundState, input: &ValidInput) -> u64 {
    state.issued_seq += 1;
    state.issued_input = Some(input.clone());
    state.issued_seq
}

fn accept_result(state: &mut RoundState, seq: u64, result: SuggestionResult) -> Result<bool> {
    if seq != state.issued_seq {
        return Ok(false);
    }
    apply_event(state, SelectionEvent::ReceiveResult(result))?;
    state.active_input = state.issued_input.take();
    Ok(true)
}

fn apply_event(state: &mut RoundState, event: SelectionEvent) -> Result<()> {
    let current = std::mem::take(&mut state.selection);
    let (next, outcome) = transition(current, event);
    state.selection = next;
    outcome
}
