// LLM provider modules
//
// This module contains the provider abstraction over the hosted
// completion and image-generation services plus the OpenAI-compatible
// HTTP client implementation.

use async_trait::async_trait;

pub mod client;
pub mod errors;
pub mod types;

pub use client::OpenAiClient;
pub use errors::{LlmError, LlmResult};
pub use types::{ImageGenerationRequest, Message};

/// Trait for providers that can generate text and images.
///
/// The production implementation is [`OpenAiClient`]; tests substitute a
/// recording stub.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a system instruction and user prompt to the completion
    /// service; returns the first choice's content verbatim.
    async fn complete(&self, system: &str, user: &str) -> LlmResult<String>;

    /// Request one image for the given prompt; returns its URL.
    async fn generate_image(&self, prompt: &str) -> LlmResult<String>;
}
