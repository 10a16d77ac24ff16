/// Core error types for the user directory
use crate::types::{UserField, UserId};
use thiserror::Error;

/// Result type alias using `DirectoryError`
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Message reported when a create collides with an existing name or email
pub const DUPLICATE_USER_MESSAGE: &str = "User with that name or email already exists";

/// Core error type for the user directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A required request field was missing or blank
    #[error("{message}")]
    Validation {
        field: UserField,
        message: String,
    },

    /// A user with the same name or email already exists
    #[error("{0}")]
    Duplicate(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl DirectoryError {
    /// Create a validation error for a blank field
    pub fn blank(field: UserField) -> Self {
        Self::Validation {
            field,
            message: field.blank_message().to_string(),
        }
    }

    /// Create a duplicate user error
    pub fn duplicate() -> Self {
        Self::Duplicate(DUPLICATE_USER_MESSAGE.to_string())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
