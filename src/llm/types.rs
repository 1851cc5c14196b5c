use serde::{Deserialize, Serialize};

/// A role-tagged message in a chat completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatCompletionRequest {
    /// Build a two-message request from a system instruction and a user prompt.
    pub fn new(model: impl Into<String>, system: &str, user: &str) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::system(system), Message::user(user)],
        }
    }
}

/// A single generated choice from the completion service.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
}

/// Response body from `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Request body for `POST /images/generations`.
///
/// Size, quality and count are fixed by the form's contract: one standard
/// quality 1024x1024 image per submission.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
}

impl ImageGenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            n: 1,
        }
    }
}

/// One generated image result.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

/// Response body from `POST /images/generations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    pub data: Vec<GeneratedImage>,
}

impl ImageGenerationResponse {
    /// URL of the first generated image, if any.
    pub fn first_url(&self) -> Option<&str> {
        self.data.first().map(|img| img.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_constructors_tag_roles() {
        let system = Message::system("You are helpful.");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "You are helpful.");

        let user = Message::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");
    }

    #[test]
    fn chat_request_carries_system_then_user() {
        let request = ChatCompletionRequest::new("gpt-3.5-turbo", "instructions", "prompt");
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "prompt");
    }

    #[test]
    fn image_request_uses_fixed_parameters() {
        let request = ImageGenerationRequest::new("dall-e-3", "renewable energy");
        assert_eq!(request.prompt, "renewable energy");
        assert_eq!(request.size, "1024x1024");
        assert_eq!(request.quality, "standard");
        assert_eq!(request.n, 1);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "dall-e-3",
                "prompt": "renewable energy",
                "size": "1024x1024",
                "quality": "standard",
                "n": 1
            })
        );
    }

    #[test]
    fn chat_response_first_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Here are some ideas."}}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("Here are some ideas."));

        let empty = ChatCompletionResponse { choices: vec![] };
        assert_eq!(empty.first_content(), None);
    }

    #[test]
    fn image_response_first_url() {
        let response: ImageGenerationResponse = serde_json::from_value(json!({
            "data": [{"url": "https://images.example/abc.png"}]
        }))
        .unwrap();
        assert_eq!(response.first_url(), Some("https://images.example/abc.png"));
    }
}
