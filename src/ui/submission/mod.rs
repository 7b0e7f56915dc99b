//! Summarization form feature module.
//!
//! Uses the MVI pattern:
//! - `form.rs` - editable input fields
//! - `state.rs` - submission lifecycle enum
//! - `intent.rs` - submission events
//! - `reducer.rs` - state transitions
//! - `view.rs` - result panel rendering

mod form;
mod intent;
mod reducer;
mod state;
mod view;

pub use form::{FormField, FormInput};
pub use intent::SubmissionIntent;
pub use reducer::SubmissionReducer;
pub use state::{SubmissionState, VALIDATION_MESSAGE};
pub use view::{button_label, render_result_panel};
