//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use std::net::TcpListener;
use std::sync::Arc;
use vidsum::api::{HttpSummarizationApi, SummarizationApi};
use vidsum::config::ServiceConfig;
use vidsum::controller::SubmissionController;
use vidsum::ui::submission::FormField;

pub const VIDEO_URL: &str = "https://youtube.com/watch?v=abc";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Service settings pointing at `base_url` with short timeouts.
pub fn service_config(base_url: &str, timeout_seconds: u64) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
        health_timeout_seconds: timeout_seconds,
    }
}

pub fn http_api(base_url: &str, timeout_seconds: u64) -> Arc<dyn SummarizationApi> {
    Arc::new(
        HttpSummarizationApi::new(&service_config(base_url, timeout_seconds))
            .expect("Failed to build HTTP client"),
    )
}

/// Controller over HTTP with the URL field already filled.
pub fn http_controller(base_url: &str, video_url: &str) -> SubmissionController {
    let mut controller = SubmissionController::new(http_api(base_url, 5));
    controller.update_field(FormField::VideoUrl, video_url);
    controller
}
