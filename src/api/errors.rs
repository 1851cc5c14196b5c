use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::llm::LlmError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Display names of missing required fields, for validation errors.
    pub missing_fields: Vec<String>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            missing_fields: Vec::new(),
        }
    }

    /// Creates a 400 Bad Request error listing the missing required fields
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!(
                "Please fill out the following required fields: {}.",
                fields.join(", ")
            ),
            missing_fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Creates a 502 Bad Gateway error for an upstream service failure
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.missing_fields.is_empty() {
            Json(json!({
                "error": self.message
            }))
        } else {
            Json(json!({
                "error": self.message,
                "missing_fields": self.missing_fields
            }))
        };

        (self.status, body).into_response()
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        Self::upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_error_lists_names() {
        let err = ApiError::missing_fields(&["Problem", "Technologies"]);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Please fill out the following required fields: Problem, Technologies."
        );
        assert_eq!(err.missing_fields, vec!["Problem", "Technologies"]);
    }

    #[test]
    fn llm_error_maps_to_bad_gateway() {
        let err: ApiError = LlmError::EmptyCompletion.into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(err.missing_fields.is_empty());
    }
}
