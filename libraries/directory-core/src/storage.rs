//! Storage trait for the user directory

use crate::error::Result;
use crate::types::{NewUser, User, UserFilter, UserId};
use async_trait::async_trait;

/// Storage backend for user records
///
/// Implementations must enforce uniqueness of `name` and `email` themselves
/// (e.g. with schema constraints) so that `create_user` is atomic.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a new user
    ///
    /// Fails with `DirectoryError::Duplicate` if the name or email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// List users matching the filter, in insertion order
    async fn list_users(&self, filter: &UserFilter) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Replace a user's name and email
    ///
    /// Uniqueness against other records is not re-checked here.
    async fn update_user(&self, id: UserId, user: NewUser) -> Result<User>;

    /// Delete a user
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
