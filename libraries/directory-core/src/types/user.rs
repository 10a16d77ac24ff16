/// User domain type
use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserId = i64;

/// A user record as stored in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier, never reused
    pub id: UserId,

    /// Unique display name
    pub name: String,

    /// Unique email address
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(name={}, email={})", self.name, self.email)
    }
}

/// Validated data for creating or replacing a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Fields accepted in a user request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
        }
    }

    /// Message reported when the field is missing or blank
    pub fn blank_message(&self) -> &'static str {
        match self {
            UserField::Name => "Name cannot be blank",
            UserField::Email => "Email cannot be blank",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated user payload as received from a client
///
/// Both fields are optional here so that a missing field can be reported by
/// name instead of failing deserialization as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Check that `name` and `email` are present and not blank
    ///
    /// `name` is checked first; the first failing field is reported.
    pub fn validate(self) -> Result<NewUser> {
        let name = required(self.name, UserField::Name)?;
        let email = required(self.email, UserField::Email)?;
        Ok(NewUser { name, email })
    }
}

fn required(value: Option<String>, field: UserField) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DirectoryError::blank(field)),
    }
}
