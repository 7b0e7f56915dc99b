//! Boundary to the remote summarization service.
//!
//! - `types.rs` - request/response wire shapes
//! - `error.rs` - transport failures and their user messages
//! - `outcome.rs` - normalized outcome of one call
//! - `client.rs` - `SummarizationApi` trait and its HTTP implementation

mod client;
mod error;
mod outcome;
mod types;

pub use client::{HttpSummarizationApi, SummarizationApi};
pub use error::{TransportError, GENERIC_ERROR_MESSAGE};
pub use outcome::{ResponseOutcome, SERVICE_FAILURE_MESSAGE};
pub use types::{embedded_error, HealthStatus, RequestPayload, SummarizeResponse};
