use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub form: FormConfig,
}

/// Connection settings for the summarization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Origin of the service (scheme + host + port), e.g. "http://localhost:5000".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total time allowed for one summarize call, in seconds (default: 300).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Total time allowed for a health check, in seconds (default: 10).
    #[serde(default = "default_health_timeout")]
    pub health_timeout_seconds: u64,
}

/// Initial form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Prompt prefilled in the form.
    #[serde(default = "default_prompt")]
    pub default_prompt: String,
}

pub const DEFAULT_PROMPT: &str = "Summarize this video in key points";

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

// Downloading and analysing a video takes minutes, not seconds.
fn default_timeout() -> u64 {
    300
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_health_timeout() -> u64 {
    10
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            health_timeout_seconds: default_health_timeout(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_prompt: default_prompt(),
        }
    }
}
