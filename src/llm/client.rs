use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::errors::{LlmError, LlmResult};
use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse,
};
use super::LlmProvider;

/// Client for an OpenAI-compatible completion and image API.
///
/// Constructed once at startup and shared through router state; there is
/// no global client or credential.
pub struct OpenAiClient {
    api_base: String,
    api_key: String,
    completion_model: String,
    image_model: String,
    http_client: Client,
}

impl OpenAiClient {
    /// Create a new client with explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `api_base` - Base URL for the API (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Secret API key sent as a bearer token
    /// * `completion_model` - Model identifier for chat completions
    /// * `image_model` - Model identifier for image generation
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        completion_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            completion_model: completion_model.into(),
            image_model: image_model.into(),
            http_client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Get the configured completion model.
    pub fn completion_model(&self) -> &str {
        &self.completion_model
    }

    /// Get the configured image model.
    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> LlmResult<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.api_base.trim_end_matches('/'), path);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> LlmResult<String> {
        let request = ChatCompletionRequest::new(&self.completion_model, system, user);

        tracing::debug!(model = %self.completion_model, "requesting chat completion");
        let response: ChatCompletionResponse =
            self.post_json("/chat/completions", &request).await?;

        response
            .first_content()
            .map(str::to_string)
            .ok_or(LlmError::EmptyCompletion)
    }

    async fn generate_image(&self, prompt: &str) -> LlmResult<String> {
        let request = ImageGenerationRequest::new(&self.image_model, prompt);

        tracing::debug!(model = %self.image_model, "requesting image generation");
        let response: ImageGenerationResponse =
            self.post_json("/images/generations", &request).await?;

        response
            .first_url()
            .map(str::to_string)
            .ok_or(LlmError::EmptyImage)
    }
}
