//! Events that move a submission through its lifecycle.

use crate::api::ResponseOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SubmissionIntent {
    /// A valid form was submitted; a request tagged `generation` is about
    /// to be sent.
    Start { generation: u64 },

    /// The form was rejected locally; no request is sent.
    Reject { message: String },

    /// The request tagged `generation` settled.
    Settle {
        generation: u64,
        outcome: ResponseOutcome,
    },

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for SubmissionIntent {}
