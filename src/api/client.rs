//! HTTP client for the summarization service.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::time::timeout;

use crate::config::ServiceConfig;

use super::error::TransportError;
use super::types::{embedded_error, HealthStatus, RequestPayload, SummarizeResponse};

const SUMMARIZE_PATH: &str = "/api/summarize";
const HEALTH_PATH: &str = "/api/health";

/// The remote collaborator that turns a video URL into a summary.
///
/// The controller only talks to this trait, so tests can substitute a fake
/// and the terminal front-end can share one client across submissions.
#[async_trait]
pub trait SummarizationApi: Send + Sync {
    /// Send one summarize request and wait for it to settle.
    ///
    /// `Ok` means a well-formed reply arrived (whatever its `success` flag);
    /// everything else is a [`TransportError`].
    async fn summarize(&self, payload: &RequestPayload)
        -> Result<SummarizeResponse, TransportError>;

    /// Query the service health endpoint.
    async fn health(&self) -> Result<HealthStatus, TransportError>;
}

/// [`SummarizationApi`] over HTTP/JSON using reqwest.
pub struct HttpSummarizationApi {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    health_timeout: Duration,
}

impl HttpSummarizationApi {
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds),
            health_timeout: Duration::from_secs(config.health_timeout_seconds),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn do_summarize(
        &self,
        url: &str,
        payload: &RequestPayload,
    ) -> Result<SummarizeResponse, TransportError> {
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        tracing::debug!(
            status = %status,
            latency_ms = start.elapsed().as_millis() as u64,
            body_bytes = body.len(),
            "Summarize response received"
        );

        if !status.is_success() {
            let embedded = embedded_error(&body);
            tracing::warn!(
                status = %status,
                embedded = ?embedded,
                "Summarization service returned an error status"
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                embedded,
            });
        }

        SummarizeResponse::from_json(&body).map_err(|reason| TransportError::Malformed {
            status: status.as_u16(),
            reason,
        })
    }

    async fn do_health(&self, url: &str) -> Result<HealthStatus, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                embedded: embedded_error(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|e| TransportError::Malformed {
            status: status.as_u16(),
            reason: format!("invalid JSON: {}", e),
        })
    }
}

#[async_trait]
impl SummarizationApi for HttpSummarizationApi {
    async fn summarize(
        &self,
        payload: &RequestPayload,
    ) -> Result<SummarizeResponse, TransportError> {
        let url = self.url(SUMMARIZE_PATH);

        tracing::debug!(
            url = %url,
            video_url = %payload.video_url,
            prompt_len = payload.prompt.len(),
            "Sending summarize request"
        );

        match timeout(self.request_timeout, self.do_summarize(&url, payload)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = self.url(HEALTH_PATH);
        match timeout(self.health_timeout, self.do_health(&url)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                duration: self.health_timeout.as_secs(),
            }),
        }
    }
}
