//! Substring filters for listing users

use serde::{Deserialize, Serialize};

/// Optional case-sensitive substring filters on `name` and `email`
///
/// Empty strings impose no constraint, same as an absent filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl UserFilter {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// Name substring, if it constrains the result
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Email substring, if it constrains the result
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
