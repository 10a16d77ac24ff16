use crate::{error::StorageError, users};
use async_trait::async_trait;
use directory_core::{
    error::Result,
    storage::UserStore,
    types::{NewUser, User, UserFilter, UserId},
};
use sqlx::SqlitePool;

/// User store backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url` and apply migrations
    pub async fn open(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn list_users(&self, filter: &UserFilter) -> Result<Vec<User>> {
        users::list(&self.pool, filter).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn update_user(&self, id: UserId, user: NewUser) -> Result<User> {
        users::update(&self.pool, id, user).await
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }
}
