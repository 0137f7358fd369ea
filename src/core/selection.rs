use crate::core::{Result, SelectionSet, SuggestionResult};
use crate::utils::error::MatchError;

/// Phase of one suggestion round, independent of the data carried by the
/// state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Empty,
    Presenting,
    Finalizing,
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A fresh candidate list arrived; restarts the round with an empty
    /// selection.
    ReceiveResult(SuggestionResult),
    /// The user ticked (`included = true`) or unticked a candidate title.
    Toggle { title: String, included: bool },
    /// The user abandoned the round without committing.
    Cancel,
    /// The user asked to commit the current selection.
    RequestFinalize,
    /// The finalize call settled with the given verdict.
    Outcome { success: bool },
}

/// Tagged selection state. Invariant at every transition: the selection is
/// a subset of the active candidate titles. Toggles only admit known
/// titles and a new result always resets the selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Empty,
    Presenting {
        candidates: SuggestionResult,
        selected: SelectionSet,
    },
    Finalizing {
        candidates: SuggestionResult,
        selected: SelectionSet,
    },
    Settled,
}

impl SelectionState {
    pub fn phase(&self) -> RoundPhase {
        match self {
            SelectionState::Empty => RoundPhase::Empty,
            SelectionState::Presenting { .. } => RoundPhase::Presenting,
            SelectionState::Finalizing { .. } => RoundPhase::Finalizing,
            SelectionState::Settled => RoundPhase::Settled,
        }
    }

    pub fn candidates(&self) -> Option<&SuggestionResult> {
        match self {
            SelectionState::Presenting { candidates, .. }
            | SelectionState::Finalizing { candidates, .. } => Some(candidates),
            _ => None,
        }
    }

    pub fn selected_titles(&self) -> &[String] {
        match self {
            SelectionState::Presenting { selected, .. }
            | SelectionState::Finalizing { selected, .. } => selected.titles(),
            _ => &[],
        }
    }
}

/// Pure transition function. Always returns the next state: a rejected
/// event leaves the state unchanged and reports why, an ignored event
/// (e.g. toggling a title that is not a candidate) leaves it unchanged
/// silently.
pub fn transition(
    state: SelectionState,
    event: SelectionEvent,
) -> (SelectionState, Result<()>) {
    match event {
        SelectionEvent::ReceiveResult(result) => match state {
            s @ SelectionState::Finalizing { .. } => {
                (s, Err(MatchError::FinalizeInFlightError))
            }
            _ => (
                SelectionState::Presenting {
                    candidates: result,
                    selected: SelectionSet::default(),
                },
                Ok(()),
            ),
        },

        SelectionEvent::Toggle { title, included } => match state {
            SelectionState::Presenting {
                candidates,
                mut selected,
            } => {
                apply_toggle(&candidates, &mut selected, title, included);
                (
                    SelectionState::Presenting {
                        candidates,
                        selected,
                    },
                    Ok(()),
                )
            }
            // Selection edits stay open while a commit is in flight.
            SelectionState::Finalizing {
                candidates,
                mut selected,
            } => {
                apply_toggle(&candidates, &mut selected, title, included);
                (
                    SelectionState::Finalizing {
                        candidates,
                        selected,
                    },
                    Ok(()),
                )
            }
            other => (other, Ok(())),
        },

        SelectionEvent::Cancel => match state {
            SelectionState::Presenting { .. } => (SelectionState::Settled, Ok(())),
            // An issued commit cannot be cancelled; it settles first.
            s @ SelectionState::Finalizing { .. } => {
                (s, Err(MatchError::FinalizeInFlightError))
            }
            other => (other, Ok(())),
        },

        SelectionEvent::RequestFinalize => match state {
            SelectionState::Presenting {
                candidates,
                selected,
            } => {
                if selected.is_empty() {
                    (
                        SelectionState::Presenting {
                            candidates,
                            selected,
                        },
                        Err(MatchError::EmptySelectionError),
                    )
                } else {
                    (
                        SelectionState::Finalizing {
                            candidates,
                            selected,
                        },
                        Ok(()),
                    )
                }
            }
            s @ SelectionState::Finalizing { .. } => {
                (s, Err(MatchError::FinalizeInFlightError))
            }
            other => (other, Err(MatchError::EmptySelectionError)),
        },

        SelectionEvent::Outcome { success } => match state {
            SelectionState::Finalizing {
                candidates,
                selected,
            } => {
                if success {
                    (SelectionState::Settled, Ok(()))
                } else {
                    // The user's picks survive a failed commit so they can
                    // retry without re-picking.
                    (
                        SelectionState::Presenting {
                            candidates,
                            selected,
                        },
                        Ok(()),
                    )
                }
            }
            other => (other, Ok(())),
        },
    }
}

fn apply_toggle(
    candidates: &SuggestionResult,
    selected: &mut SelectionSet,
    title: String,
    included: bool,
) {
    if included {
        if candidates.contains_title(&title) {
            selected.insert(title);
        }
        // Unknown titles are ignored rather than rejected.
    } else {
        selected.remove(&title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Service;

    fn result(titles: &[&str]) -> SuggestionResult {
        let services = titles
            .iter()
            .map(|t| Service {
                title: t.to_string(),
                description: format!("{} description", t),
            })
            .collect();
        SuggestionResult::new(services).unwrap()
    }

    fn presenting(titles: &[&str]) -> SelectionState {
        let (state, res) = transition(
            SelectionState::Empty,
            SelectionEvent::ReceiveResult(result(titles)),
        );
        res.unwrap();
        state
    }

    fn toggled(state: SelectionState, title: &str, included: bool) -> SelectionState {
        let (state, res) = transition(
            state,
            SelectionEvent::Toggle {
                title: title.to_string(),
                included,
            },
        );
        res.unwrap();
        state
    }

    #[test]
    fn test_receive_result_presents_with_empty_selection() {
        let state = presenting(&["A", "B"]);
        assert_eq!(state.phase(), RoundPhase::Presenting);
        assert!(state.selected_titles().is_empty());
        assert_eq!(state.candidates().unwrap().candidate_count(), 2);
    }

    #[test]
    fn test_toggle_sequence_keeps_the_remaining_titles() {
        let mut state = presenting(&["A", "B", "C"]);
        state = toggled(state, "A", true);
        state = toggled(state, "B", true);
        state = toggled(state, "A", false);
        assert_eq!(state.selected_titles(), &["B".to_string()]);
    }

    #[test]
    fn test_toggle_unknown_title_is_ignored() {
        let mut state = presenting(&["A"]);
        state = toggled(state, "nope", true);
        assert!(state.selected_titles().is_empty());
        assert_eq!(state.phase(), RoundPhase::Presenting);
    }

    #[test]
    fn test_toggle_outside_a_round_is_ignored() {
        let state = toggled(SelectionState::Empty, "A", true);
        assert_eq!(state, SelectionState::Empty);

        let state = toggled(SelectionState::Settled, "A", true);
        assert_eq!(state, SelectionState::Settled);
    }

    #[test]
    fn test_finalize_with_empty_selection_is_rejected_in_place() {
        let state = presenting(&["A"]);
        let (state, res) = transition(state, SelectionEvent::RequestFinalize);
        assert!(matches!(res, Err(MatchError::EmptySelectionError)));
        assert_eq!(state.phase(), RoundPhase::Presenting);
    }

    #[test]
    fn test_finalize_reentry_is_blocked() {
        let state = toggled(presenting(&["A"]), "A", true);
        let (state, res) = transition(state, SelectionEvent::RequestFinalize);
        res.unwrap();
        assert_eq!(state.phase(), RoundPhase::Finalizing);

        let (state, res) = transition(state, SelectionEvent::RequestFinalize);
        assert!(matches!(res, Err(MatchError::FinalizeInFlightError)));
        assert_eq!(state.phase(), RoundPhase::Finalizing);
    }

    #[test]
    fn test_selection_edits_stay_open_while_finalizing() {
        let state = toggled(presenting(&["A", "B"]), "A", true);
        let (state, res) = transition(state, SelectionEvent::RequestFinalize);
        res.unwrap();

        let state = toggled(state, "B", true);
        assert_eq!(state.phase(), RoundPhase::Finalizing);
        assert_eq!(
            state.selected_titles(),
            &["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_successful_outcome_settles_and_clears() {
        let state = toggled(presenting(&["A"]), "A", true);
        let (state, _) = transition(state, SelectionEvent::RequestFinalize);
        let (state, res) = transition(state, SelectionEvent::Outcome { success: true });
        res.unwrap();
        assert_eq!(state, SelectionState::Settled);
        assert!(state.selected_titles().is_empty());
    }

    #[test]
    fn test_failed_outcome_returns_to_presenting_with_selection() {
        let state = toggled(presenting(&["A", "B"]), "A", true);
        let (state, _) = transition(state, SelectionEvent::RequestFinalize);
        let (state, res) = transition(state, SelectionEvent::Outcome { success: false });
        res.unwrap();
        assert_eq!(state.phase(), RoundPhase::Presenting);
        assert_eq!(state.selected_titles(), &["A".to_string()]);
    }

    #[test]
    fn test_cancel_discards_the_round() {
        let state = toggled(presenting(&["A"]), "A", true);
        let (state, res) = transition(state, SelectionEvent::Cancel);
        res.unwrap();
        assert_eq!(state, SelectionState::Settled);
    }

    #[test]
    fn test_cancel_is_rejected_while_finalizing() {
        let state = toggled(presenting(&["A"]), "A", true);
        let (state, _) = transition(state, SelectionEvent::RequestFinalize);
        let (state, res) = transition(state, SelectionEvent::Cancel);
        assert!(matches!(res, Err(MatchError::FinalizeInFlightError)));
        assert_eq!(state.phase(), RoundPhase::Finalizing);
    }

    #[test]
    fn test_settled_round_restarts_on_new_result() {
        let state = toggled(presenting(&["A"]), "A", true);
        let (state, _) = transition(state, SelectionEvent::Cancel);

        let (state, res) = transition(state, SelectionEvent::ReceiveResult(result(&["C"])));
        res.unwrap();
        assert_eq!(state.phase(), RoundPhase::Presenting);
        assert!(state.selected_titles().is_empty());
        assert!(state.candidates().unwrap().contains_title("C"));
    }

    #[test]
    fn test_new_result_is_rejected_while_finalizing() {
        let state = toggled(presenting(&["A"]), "A", true);
        let (state, _) = transition(state, SelectionEvent::RequestFinalize);
        let (state, res) = transition(state, SelectionEvent::ReceiveResult(result(&["B"])));
        assert!(matches!(res, Err(MatchError::FinalizeInFlightError)));
        assert!(state.candidates().unwrap().contains_title("A"));
    }
}
