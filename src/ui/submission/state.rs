//! State of the current (or last) submission.

use crate::ui::mvi::UiState;

/// Message shown when the form is submitted without a video URL.
pub const VALIDATION_MESSAGE: &str = "Please enter a video URL";

/// Lifecycle of a submission. Exactly one variant is active, so a summary
/// and an error can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Waiting for the service.
    Submitting {
        /// Identifies the request this state is waiting for.
        generation: u64,
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// The service returned a summary.
    Succeeded { summary: String },

    /// Validation, service or transport failure.
    Failed { message: String },
}

impl UiState for SubmissionState {}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Succeeded or Failed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Generation of the in-flight request, if any.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Submitting { generation, .. } => Some(*generation),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Succeeded { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
