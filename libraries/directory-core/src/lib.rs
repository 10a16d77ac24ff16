//! User Directory Core
//!
//! Storage-agnostic domain types, validation, traits, and error handling for
//! the user directory.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserDraft`, `UserFilter`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `DirectoryError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use directory_core::types::{UserDraft, UserFilter};
//!
//! let draft = UserDraft::new("Alice", "alice@x.com");
//! let new_user = draft.validate().unwrap();
//! assert_eq!(new_user.name, "Alice");
//!
//! let filter = UserFilter::new(Some("Ali".to_string()), None);
//! assert_eq!(filter.name(), Some("Ali"));
//! assert_eq!(filter.email(), None);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{DirectoryError, Result};
pub use storage::UserStore;
pub use types::{NewUser, User, UserDraft, UserField, UserFilter, UserId};
