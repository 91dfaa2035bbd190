//! JSON error responses for the HTTP routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use crate::utils::errors::{LlmError, VoxifyError};

pub type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: serde_json::Value,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": message.into() }),
        }
    }

    /// 500 with the `{error, details, success: false}` body clients expect
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({
                "error": message.into(),
                "details": details.into(),
                "success": false,
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<VoxifyError> for ApiError {
    fn from(error: VoxifyError) -> Self {
        match error {
            VoxifyError::InvalidInput(message) => Self::bad_request(message),
            VoxifyError::Llm(LlmError::MissingApiKey) => Self::internal(
                "GROQ_API_KEY is not configured on the server.",
                LlmError::MissingApiKey.to_string(),
            ),
            other => Self::internal("Request failed. Please try again later.", other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let error = ApiError::from(VoxifyError::InvalidInput("no text".to_string()));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.body["error"], "no text");
    }

    #[test]
    fn test_missing_key_is_internal() {
        let error = ApiError::from(VoxifyError::Llm(LlmError::MissingApiKey));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body["success"], false);
    }
}
