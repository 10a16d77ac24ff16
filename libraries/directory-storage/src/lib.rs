//! User Directory Storage
//!
//! `SQLite` database layer for the user directory.
//!
//! This crate provides persistent storage for user records behind the
//! [`directory_core::UserStore`] trait.
//!
//! # Architecture
//!
//! - **Schema constraints**: `name` and `email` are `UNIQUE` in the table, so
//!   duplicate detection is atomic with the insert
//! - **Vertical Slicing**: the `users` module owns its queries
//! - **Embedded migrations**: the schema ships inside the binary and is
//!   applied on startup
//!
//! # Example
//!
//! ```rust,no_run
//! use directory_storage::{create_pool, run_migrations, SqliteUserStore};
//! use directory_core::{UserDraft, UserFilter, UserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://database.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! let alice = store
//!     .create_user(UserDraft::new("Alice", "alice@x.com").validate()?)
//!     .await?;
//! let users = store.list_users(&UserFilter::default()).await?;
//! assert_eq!(users, vec![alice]);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::SqliteUserStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the `users` table exists.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://database.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
