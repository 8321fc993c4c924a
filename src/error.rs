//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Joke with the given ID was not found
    #[error("Joke not found: {0}")]
    JokeNotFound(String),

    /// A joke field failed validation
    #[error("Invalid joke: {0}")]
    Validation(String),

    /// Requested joke kind is not one of the supported kinds
    #[error("Unknown joke kind: {0}")]
    UnknownKind(String),

    /// The `kind` query parameter was not supplied
    #[error("Missing required query parameter: kind")]
    MissingKind,

    /// No stored jokes were available when one was requested
    #[error("No jokes stored yet")]
    NoJokesStored,

    /// An external joke provider call failed
    #[error("Joke provider error: {0}")]
    Provider(String),

    /// Database query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::JokeNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UnknownKind(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MissingKind => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NoJokesStored => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Provider(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
