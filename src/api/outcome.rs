//! Normalized result of one summarize call.

use super::error::TransportError;
use super::types::SummarizeResponse;

/// Fallback when the service reports failure without an error text.
pub const SERVICE_FAILURE_MESSAGE: &str = "Failed to summarize video";

/// What a settled summarize call means for the user.
///
/// Every variant carries display-ready text; fallbacks are applied when the
/// outcome is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Success(String),
    ServiceError(String),
    TransportError(String),
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success(_))
    }

    /// Text to display: the summary or the error message.
    pub fn text(&self) -> &str {
        match self {
            ResponseOutcome::Success(text)
            | ResponseOutcome::ServiceError(text)
            | ResponseOutcome::TransportError(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResponseOutcome::Success(_) => "success",
            ResponseOutcome::ServiceError(_) => "service_error",
            ResponseOutcome::TransportError(_) => "transport_error",
        }
    }
}

impl From<SummarizeResponse> for ResponseOutcome {
    fn from(response: SummarizeResponse) -> Self {
        match response {
            SummarizeResponse::Success { summary } => ResponseOutcome::Success(summary),
            SummarizeResponse::Failure { error } => ResponseOutcome::ServiceError(
                error.unwrap_or_else(|| SERVICE_FAILURE_MESSAGE.to_string()),
            ),
        }
    }
}

impl From<TransportError> for ResponseOutcome {
    fn from(err: TransportError) -> Self {
        ResponseOutcome::TransportError(err.user_message())
    }
}

impl From<Result<SummarizeResponse, TransportError>> for ResponseOutcome {
    fn from(result: Result<SummarizeResponse, TransportError>) -> Self {
        match result {
            Ok(response) => response.into(),
            Err(err) => err.into(),
        }
    }
}
