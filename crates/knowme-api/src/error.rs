//! knowme — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use knowme_core::repository::RepositoryError;
use knowme_game::application::GameError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// One entry per violated business rule, in detection order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// HTTP-layer wrapper around `GameError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self.0 {
            GameError::Rejected(errors) => {
                (StatusCode::BAD_REQUEST, "validation_error", errors.messages())
            }
            GameError::Repository(RepositoryError::AggregateNotFound(_)) => {
                (StatusCode::NOT_FOUND, "game_not_found", Vec::new())
            }
            GameError::Repository(RepositoryError::ConcurrencyConflict { .. }) => {
                (StatusCode::CONFLICT, "concurrency_conflict", Vec::new())
            }
            GameError::Repository(RepositoryError::Infrastructure(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error", Vec::new())
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
