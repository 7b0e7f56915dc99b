//! Wire types for the summarization service.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/summarize`.
///
/// Field names are fixed by the service contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub video_url: String,
    pub prompt: String,
}

/// Decoded reply of `POST /api/summarize`, dispatched on the `success` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeResponse {
    /// `{"success": true, "summary": "..."}`
    Success { summary: String },
    /// `{"success": false, "error": "..."}`, error text optional.
    Failure { error: Option<String> },
}

/// Raw JSON shape before the `success` flag is interpreted.
///
/// serde cannot tag an enum on a boolean, so the body lands here first
/// and is converted with `TryFrom`.
#[derive(Debug, Deserialize)]
struct RawSummarizeResponse {
    success: bool,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawSummarizeResponse> for SummarizeResponse {
    type Error = String;

    fn try_from(raw: RawSummarizeResponse) -> Result<Self, Self::Error> {
        if raw.success {
            raw.summary
                .map(|summary| SummarizeResponse::Success { summary })
                .ok_or_else(|| "success response without summary".to_string())
        } else {
            Ok(SummarizeResponse::Failure {
                error: raw.error.filter(|e| !e.is_empty()),
            })
        }
    }
}

impl SummarizeResponse {
    /// Parse a response body.
    ///
    /// Returns a description of the problem when the body is not a valid
    /// summarize reply.
    pub fn from_json(body: &[u8]) -> Result<Self, String> {
        let raw: RawSummarizeResponse =
            serde_json::from_slice(body).map_err(|e| format!("invalid JSON: {}", e))?;
        SummarizeResponse::try_from(raw)
    }
}

/// Reply of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Pull a non-empty `error` string out of an arbitrary JSON body.
///
/// Used for non-2xx replies, whose body has no contract but often carries
/// the service's own error text.
pub fn embedded_error(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.as_str())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
}
