use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::domain::Submission;
use crate::llm::{LlmProvider, LlmResult};
use crate::prompts::{assemble_user_prompt, PromptInputs, SYSTEM_INSTRUCTIONS};

/// Warning shown when the image step is skipped for a blank subject.
pub const EMPTY_SUBJECT_WARNING: &str =
    "Error: A valid prompt is required for image generation.";

/// Shared application state: the provider client constructed once at
/// startup, plus the cosmetic pre-processing delay.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
    pub submit_delay: Duration,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>, submit_delay: Duration) -> Self {
        Self {
            provider,
            submit_delay,
        }
    }
}

/// Response from a successful submission
#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    /// The completion service's answer, verbatim.
    pub ideas: String,
    /// URL of the generated image, when a subject was provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Warning emitted when the image step was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_warning: Option<String>,
}

/// Outcome of the image invocation step.
#[derive(Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The subject was blank; the provider was never contacted.
    Skipped,
    /// One image was generated; carries its URL.
    Generated(String),
}

/// Image invocation step.
///
/// A blank subject short-circuits before the provider is touched, so no
/// empty-prompt request can reach the image service.
pub async fn generate_image_step(
    provider: &dyn LlmProvider,
    subject: &str,
) -> LlmResult<ImageOutcome> {
    if subject.trim().is_empty() {
        tracing::warn!("image generation skipped: empty subject");
        return Ok(ImageOutcome::Skipped);
    }

    let url = provider.generate_image(subject).await?;
    Ok(ImageOutcome::Generated(url))
}

/// Handle one form submission
///
/// POST /api/ideas
///
/// Pipeline: fixed delay → validate → assemble prompts → completion call
/// → optional image call. Each submission is an independent round trip;
/// nothing is cached or deduplicated.
pub async fn submit_ideas(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<IdeasResponse>, ApiError> {
    // Cosmetic pause carried over from the original form's spinner.
    tokio::time::sleep(state.submit_delay).await;

    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(&missing));
    }

    tracing::info!(
        technologies = submission.technologies.len(),
        "gathering project ideas"
    );

    let inputs = PromptInputs {
        problem: submission.problem.clone(),
        technologies: submission.technologies.clone(),
        other_technologies: submission.other_technologies.clone(),
        articles: submission.articles.clone(),
        datasets: submission.datasets.clone(),
    };
    let prompt = assemble_user_prompt(&inputs);

    let ideas = state
        .provider
        .complete(SYSTEM_INSTRUCTIONS, &prompt)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "completion request failed");
            ApiError::from(e)
        })?;

    let (image_url, image_warning) =
        match generate_image_step(state.provider.as_ref(), &submission.subject).await {
            Ok(ImageOutcome::Generated(url)) => (Some(url), None),
            Ok(ImageOutcome::Skipped) => (None, Some(EMPTY_SUBJECT_WARNING.to_string())),
            Err(e) => {
                tracing::error!(error = %e, "image request failed");
                return Err(ApiError::from(e));
            }
        };

    Ok(Json(IdeasResponse {
        ideas,
        image_url,
        image_warning,
    }))
}

/// Serve the single-page form
///
/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider stub that records every call it receives.
    struct RecordingProvider {
        image_prompts: Mutex<Vec<String>>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            Self {
                image_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        async fn complete(&self, _system: &str, _user: &str) -> LlmResult<String> {
            Ok("ideas".to_string())
        }

        async fn generate_image(&self, prompt: &str) -> LlmResult<String> {
            self.image_prompts.lock().unwrap().push(prompt.to_string());
            Ok("https://images.example/generated.png".to_string())
        }
    }

    /// Provider stub that fails if contacted at all.
    struct PanickingProvider;

    #[async_trait]
    impl LlmProvider for PanickingProvider {
        async fn complete(&self, _system: &str, _user: &str) -> LlmResult<String> {
            panic!("completion service must not be contacted");
        }

        async fn generate_image(&self, _prompt: &str) -> LlmResult<String> {
            panic!("image service must not be contacted");
        }
    }

    #[tokio::test]
    async fn blank_subject_skips_the_provider() {
        let outcome = generate_image_step(&PanickingProvider, "")
            .await
            .unwrap();
        assert_eq!(outcome, ImageOutcome::Skipped);

        let outcome = generate_image_step(&PanickingProvider, "   ")
            .await
            .unwrap();
        assert_eq!(outcome, ImageOutcome::Skipped);
    }

    #[tokio::test]
    async fn subject_issues_exactly_one_request_with_literal_prompt() {
        let provider = RecordingProvider::new();
        let outcome = generate_image_step(&provider, "renewable energy")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ImageOutcome::Generated("https://images.example/generated.png".to_string())
        );
        let prompts = provider.image_prompts.lock().unwrap();
        assert_eq!(prompts.as_slice(), ["renewable energy"]);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_error() {
        struct FailingProvider;

        #[async_trait]
        impl LlmProvider for FailingProvider {
            async fn complete(&self, _system: &str, _user: &str) -> LlmResult<String> {
                Err(LlmError::EmptyCompletion)
            }

            async fn generate_image(&self, _prompt: &str) -> LlmResult<String> {
                Err(LlmError::EmptyImage)
            }
        }

        let result = generate_image_step(&FailingProvider, "solar panels").await;
        assert!(result.is_err());
    }
}
