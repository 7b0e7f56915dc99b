//! Transport-level failures talking to the summarization service.

use thiserror::Error;

/// Generic message shown when a failure carries no usable text.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors that prevent a well-formed reply from reaching the controller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the service (refused, DNS, TLS, reset).
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No reply within the configured timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-2xx status.
    #[error("Service returned HTTP {status}")]
    Status {
        status: u16,
        /// `error` field recovered from the reply body, if any.
        embedded: Option<String>,
    },

    /// 2xx reply whose body is not a valid summarize reply.
    #[error("Malformed response (HTTP {status}): {reason}")]
    Malformed { status: u16, reason: String },
}

impl TransportError {
    /// Error text the service embedded in its failure payload.
    pub fn embedded_message(&self) -> Option<&str> {
        match self {
            TransportError::Status { embedded, .. } => embedded.as_deref(),
            _ => None,
        }
    }

    /// Message from the transport layer itself.
    ///
    /// Only failures that never produced a reply have one; a bad status or a
    /// broken body is reported with the generic message instead.
    pub fn transport_message(&self) -> Option<String> {
        match self {
            TransportError::Connection { .. } | TransportError::Timeout { .. } => {
                Some(self.to_string())
            }
            TransportError::Status { .. } | TransportError::Malformed { .. } => None,
        }
    }

    /// User-facing text: embedded message, else transport message, else
    /// [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        self.embedded_message()
            .map(str::to_string)
            .or_else(|| self.transport_message())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    /// Short classification for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            TransportError::Connection { .. } => "connection_error",
            TransportError::Timeout { .. } => "request_timeout",
            TransportError::Status { .. } => "http_status",
            TransportError::Malformed { .. } => "malformed_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_embedded_error_uses_it() {
        let err = TransportError::Status {
            status: 500,
            embedded: Some("Failed to download video".into()),
        };
        assert_eq!(err.user_message(), "Failed to download video");
        assert_eq!(err.error_type(), "http_status");
    }

    #[test]
    fn status_without_body_falls_back_to_generic() {
        let err = TransportError::Status {
            status: 500,
            embedded: None,
        };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn malformed_body_falls_back_to_generic() {
        let err = TransportError::Malformed {
            status: 200,
            reason: "invalid JSON".into(),
        };
        assert_eq!(err.transport_message(), None);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn timeout_reports_transport_message() {
        let err = TransportError::Timeout { duration: 30 };
        assert_eq!(err.user_message(), "Request timeout after 30s");
        assert_eq!(err.error_type(), "request_timeout");
    }
}
