//! Submission lifecycle: validation, request dispatch and outcome mapping.
//!
//! [`SubmissionController`] is the only owner of the form and of the
//! [`SubmissionState`]. Every change to the state goes through
//! [`SubmissionReducer`], so the controller itself only decides *which*
//! intent to dispatch.
//!
//! A submission can be driven in one call with [`SubmissionController::submit`],
//! or split in two halves for front-ends that run the request elsewhere:
//!
//! ```text
//! begin() ──→ PendingSubmission::run() (any task) ──→ complete()
//! ```

use std::sync::Arc;
use thiserror::Error;

use crate::api::{RequestPayload, ResponseOutcome, SummarizationApi};
use crate::ui::mvi::Reducer;
use crate::ui::submission::{
    FormField, FormInput, SubmissionIntent, SubmissionReducer, SubmissionState,
    VALIDATION_MESSAGE,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Reasons a submission never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form failed local validation.
    #[error("{message}")]
    Validation { message: String },

    /// A previous submission has not settled yet.
    #[error("A submission is already in progress")]
    InFlight,
}

/// A validated request waiting to be sent.
pub struct PendingSubmission {
    generation: u64,
    payload: RequestPayload,
    api: Arc<dyn SummarizationApi>,
}

impl PendingSubmission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn payload(&self) -> &RequestPayload {
        &self.payload
    }

    /// Send the request and wait for it to settle.
    ///
    /// Never fails: every transport problem is folded into the outcome.
    pub async fn run(self) -> CompletedSubmission {
        let result = self.api.summarize(&self.payload).await;

        if let Err(err) = &result {
            tracing::warn!(
                generation = self.generation,
                error_type = err.error_type(),
                error = %err,
                "Summarize request failed"
            );
        }

        CompletedSubmission {
            generation: self.generation,
            outcome: ResponseOutcome::from(result),
        }
    }
}

/// A settled request, ready to be applied with
/// [`SubmissionController::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSubmission {
    pub generation: u64,
    pub outcome: ResponseOutcome,
}

pub struct SubmissionController {
    api: Arc<dyn SummarizationApi>,
    form: FormInput,
    state: SubmissionState,
    /// Number of submissions that reached the network.
    generation: u64,
}

impl SubmissionController {
    pub fn new(api: Arc<dyn SummarizationApi>) -> Self {
        Self::with_form(api, FormInput::default())
    }

    pub fn with_form(api: Arc<dyn SummarizationApi>, form: FormInput) -> Self {
        Self {
            api,
            form,
            state: SubmissionState::default(),
            generation: 0,
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace a form field. Never validates and never touches the state.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Validate the form and enter Submitting.
    ///
    /// On success the returned [`PendingSubmission`] must be run and its
    /// result passed to [`complete`](Self::complete). A blank URL moves the
    /// state to Failed and returns [`SubmitError::Validation`].
    pub fn begin(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.state.is_submitting() {
            tracing::debug!(
                generation = self.generation,
                "Submission ignored, request still in flight"
            );
            return Err(SubmitError::InFlight);
        }

        if !self.form.has_video_url() {
            tracing::debug!("Submission rejected: empty video URL");
            self.dispatch(SubmissionIntent::Reject {
                message: VALIDATION_MESSAGE.to_string(),
            });
            return Err(SubmitError::Validation {
                message: VALIDATION_MESSAGE.to_string(),
            });
        }

        self.generation += 1;
        let generation = self.generation;
        self.dispatch(SubmissionIntent::Start { generation });

        tracing::info!(
            generation,
            video_url = %self.form.video_url,
            "Submitting video for summarization"
        );

        Ok(PendingSubmission {
            generation,
            payload: self.form.payload(),
            api: Arc::clone(&self.api),
        })
    }

    /// Apply a settled request. Completions of superseded requests are
    /// dropped by the reducer.
    pub fn complete(&mut self, done: CompletedSubmission) -> &SubmissionState {
        let current = self.state.generation();
        if current != Some(done.generation) {
            tracing::debug!(
                generation = done.generation,
                current = ?current,
                "Dropping stale completion"
            );
        } else {
            tracing::info!(
                generation = done.generation,
                outcome = done.outcome.kind(),
                "Submission settled"
            );
        }

        self.dispatch(SubmissionIntent::Settle {
            generation: done.generation,
            outcome: done.outcome,
        });
        &self.state
    }

    /// Advance the spinner while a request is pending.
    pub fn tick(&mut self) {
        self.dispatch(SubmissionIntent::AnimationTick);
    }

    /// Submit the current form and wait until the state is terminal.
    ///
    /// Service and transport failures are not errors here: they end in
    /// [`SubmissionState::Failed`] like any other outcome.
    pub async fn submit(&mut self) -> Result<&SubmissionState, SubmitError> {
        let pending = self.begin()?;
        let done = pending.run().await;
        Ok(self.complete(done))
    }

    fn dispatch(&mut self, intent: SubmissionIntent) {
        dispatch_mvi!(self, state, SubmissionReducer, intent);
    }
}
