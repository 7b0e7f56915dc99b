//! Submission state transitions.

use crate::api::ResponseOutcome;
use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::state::SubmissionState;

pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionState;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Starting replaces any previous summary or error. A request
            // already in flight keeps the form busy.
            SubmissionIntent::Start { generation } => match state {
                SubmissionState::Submitting { .. } => state,
                _ => SubmissionState::Submitting {
                    generation,
                    animation_tick: 0,
                },
            },

            SubmissionIntent::Reject { message } => match state {
                SubmissionState::Submitting { .. } => state,
                _ => SubmissionState::Failed { message },
            },

            SubmissionIntent::Settle {
                generation,
                outcome,
            } => match state {
                SubmissionState::Submitting {
                    generation: current,
                    ..
                } if current == generation => match outcome {
                    ResponseOutcome::Success(summary) => SubmissionState::Succeeded { summary },
                    ResponseOutcome::ServiceError(message)
                    | ResponseOutcome::TransportError(message) => {
                        SubmissionState::Failed { message }
                    }
                },
                // Stale or unexpected completion
                other => other,
            },

            SubmissionIntent::AnimationTick => match state {
                SubmissionState::Submitting {
                    generation,
                    animation_tick,
                } => SubmissionState::Submitting {
                    generation,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitting(generation: u64) -> SubmissionState {
        SubmissionState::Submitting {
            generation,
            animation_tick: 0,
        }
    }

    #[test]
    fn start_from_idle_enters_submitting() {
        let state = SubmissionReducer::reduce(
            SubmissionState::Idle,
            SubmissionIntent::Start { generation: 1 },
        );
        assert_eq!(state, submitting(1));
    }

    #[test]
    fn start_clears_previous_error() {
        let state = SubmissionReducer::reduce(
            SubmissionState::Failed {
                message: "old error".into(),
            },
            SubmissionIntent::Start { generation: 2 },
        );
        assert_eq!(state, submitting(2));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn start_clears_previous_summary() {
        let state = SubmissionReducer::reduce(
            SubmissionState::Succeeded {
                summary: "old".into(),
            },
            SubmissionIntent::Start { generation: 3 },
        );
        assert_eq!(state.summary(), None);
        assert!(state.is_submitting());
    }

    #[test]
    fn start_while_submitting_is_ignored() {
        let state = SubmissionReducer::reduce(submitting(1), SubmissionIntent::Start { generation: 2 });
        assert_eq!(state.generation(), Some(1));
    }

    #[test]
    fn reject_fails_immediately() {
        let state = SubmissionReducer::reduce(
            SubmissionState::Succeeded {
                summary: "old".into(),
            },
            SubmissionIntent::Reject {
                message: "Please enter a video URL".into(),
            },
        );
        assert_eq!(
            state,
            SubmissionState::Failed {
                message: "Please enter a video URL".into()
            }
        );
    }

    #[test]
    fn reject_does_not_interrupt_pending_request() {
        let state = SubmissionReducer::reduce(
            submitting(1),
            SubmissionIntent::Reject {
                message: "Please enter a video URL".into(),
            },
        );
        assert_eq!(state, submitting(1));
    }

    #[test]
    fn settle_success_stores_summary() {
        let state = SubmissionReducer::reduce(
            submitting(1),
            SubmissionIntent::Settle {
                generation: 1,
                outcome: ResponseOutcome::Success("Key points...".into()),
            },
        );
        assert_eq!(
            state,
            SubmissionState::Succeeded {
                summary: "Key points...".into()
            }
        );
    }

    #[test]
    fn settle_errors_store_message() {
        for outcome in [
            ResponseOutcome::ServiceError("Failed to summarize video".into()),
            ResponseOutcome::TransportError("An error occurred".into()),
        ] {
            let expected = outcome.text().to_string();
            let state = SubmissionReducer::reduce(
                submitting(5),
                SubmissionIntent::Settle {
                    generation: 5,
                    outcome,
                },
            );
            assert_eq!(state, SubmissionState::Failed { message: expected });
        }
    }

    #[test]
    fn stale_settle_is_ignored() {
        let state = SubmissionReducer::reduce(
            submitting(2),
            SubmissionIntent::Settle {
                generation: 1,
                outcome: ResponseOutcome::Success("late".into()),
            },
        );
        assert_eq!(state, submitting(2));

        let terminal = SubmissionState::Failed {
            message: "x".into(),
        };
        let state = SubmissionReducer::reduce(
            terminal.clone(),
            SubmissionIntent::Settle {
                generation: 1,
                outcome: ResponseOutcome::Success("late".into()),
            },
        );
        assert_eq!(state, terminal);
    }

    #[test]
    fn animation_tick_increments_only_while_submitting() {
        let state = SubmissionReducer::reduce(
            SubmissionState::Submitting {
                generation: 1,
                animation_tick: 255,
            },
            SubmissionIntent::AnimationTick,
        );
        assert_eq!(
            state,
            SubmissionState::Submitting {
                generation: 1,
                animation_tick: 0
            }
        );

        let idle = SubmissionReducer::reduce(SubmissionState::Idle, SubmissionIntent::AnimationTick);
        assert_eq!(idle, SubmissionState::Idle);
    }
}
