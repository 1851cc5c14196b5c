use std::time::Duration;

use thiserror::Error;

/// Configuration error raised during startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must be set")]
    MissingApiKey,
}

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret key for the completion/image API.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API.
    pub api_base: String,
    /// Model identifier for chat completions.
    pub completion_model: String,
    /// Model identifier for image generation.
    pub image_model: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Cosmetic delay awaited before each submission is processed.
    pub submit_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only `OPENAI_API_KEY` is required; everything else falls back to a
    /// logged default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        let api_base = std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| {
            "https://api.openai.com/v1".to_string()
        });

        let completion_model = std::env::var("COMPLETION_MODEL").unwrap_or_else(|_| {
            tracing::warn!("COMPLETION_MODEL not set, using default");
            "gpt-3.5-turbo".to_string()
        });

        let image_model = std::env::var("IMAGE_MODEL").unwrap_or_else(|_| {
            tracing::warn!("IMAGE_MODEL not set, using default");
            "dall-e-3".to_string()
        });

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let submit_delay = std::env::var("SUBMIT_DELAY_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));

        Ok(Self {
            api_key,
            api_base,
            completion_model,
            image_model,
            bind_addr,
            submit_delay,
        })
    }
}
