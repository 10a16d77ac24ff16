//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and constraints.

#![allow(dead_code)]

use directory_core::types::{NewUser, User};
use directory_storage::SqliteUserStore;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let store = SqliteUserStore::open(&db_url)
            .await
            .expect("Failed to open store");

        Self {
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        self.store.pool()
    }
}

/// Test fixture: build a validated user payload
pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}

/// Test fixture: insert a user through the users slice
pub async fn create_test_user(pool: &SqlitePool, name: &str, email: &str) -> User {
    directory_storage::users::create(pool, new_user(name, email))
        .await
        .expect("Failed to create test user")
}

/// Count rows in the users table
pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
