use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse, Json};
use entity::prelude::*;
use serde_json::{Map, Value};
use tracing::error;

use crate::ApiError;

static ERROR_CODES: OnceLock<Map<String, Value>> = OnceLock::new();

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status_code, Json(GenerationResult::failure(message))).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(code = error_code, error = format!("{:?}", e));
            ApiError::from_code(error_code)
        })
    }
}

impl ApiError {
    /// Builds the error for a code such as `"400-001"`; the leading digit
    /// picks the status class.
    pub fn from_code(error_code: &str) -> Self {
        let message = message(error_code);

        match error_code.as_bytes().first() {
            Some(&b'4') if error_code.starts_with("404") => {
                ApiError::NotFound(message)
            }
            Some(&b'4') => ApiError::ClientError(message),
            _ => ApiError::ServerError(message),
        }
    }
}

pub fn message(error_code: &str) -> String {
    let errors = ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or_default()
    });

    errors
        .get(error_code)
        .and_then(Value::as_str)
        .unwrap_or("Internal server error")
        .to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_message() {
        assert_eq!(message("500-001"), "Failed to generate requirements");
        assert_eq!(message("999-999"), "Internal server error");
    }

    #[test]
    fn test_from_code() {
        assert!(matches!(
            ApiError::from_code("400-001"),
            ApiError::ClientError(m) if m == "Idea must not be empty"
        ));
        assert!(matches!(ApiError::from_code("404-001"), ApiError::NotFound(_)));
        assert!(matches!(
            ApiError::from_code("500-001"),
            ApiError::ServerError(_)
        ));
    }

    #[test]
    fn test_into_api_response_hides_cause() {
        let result: anyhow::Result<()> =
            Err(anyhow::anyhow!("connection refused"));

        let error = IntoApiResponse::into_response(result, "500-001").unwrap_err();

        assert!(matches!(
            error,
            ApiError::ServerError(m) if m == "Failed to generate requirements"
        ));
    }
}
