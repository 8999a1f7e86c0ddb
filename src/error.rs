use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Game not found")]
    GameNotFound,

    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::GameNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("Request failed with {}: {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::GameNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidInput("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::GameNotFound.to_string(), "Game not found");
    }
}
