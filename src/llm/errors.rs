use thiserror::Error;

/// Errors that can occur when talking to the completion or image services
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to the model API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("completion response contained no choices")]
    EmptyCompletion,

    #[error("image response contained no results")]
    EmptyImage,
}

pub type LlmResult<T> = Result<T, LlmError>;
