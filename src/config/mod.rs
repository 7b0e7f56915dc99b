mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FormConfig, ServiceConfig, DEFAULT_PROMPT};
