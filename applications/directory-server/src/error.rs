/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use directory_core::{DirectoryError, UserField};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Message returned when an id does not match any user
pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed on {field}: {message}")]
    Validation { field: UserField, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Database(DirectoryError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DirectoryError> for ServerError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Validation { field, message } => {
                ServerError::Validation { field, message }
            }
            DirectoryError::Duplicate(msg) => ServerError::Conflict(msg),
            DirectoryError::UserNotFound(_) => ServerError::NotFound(USER_NOT_FOUND.to_string()),
            other => ServerError::Database(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ field.as_str(): message }),
            ),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, json!(msg)),
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, json!("Database error"))
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Configuration error"),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
