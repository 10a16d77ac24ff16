mod filter;
mod user;

pub use filter::UserFilter;
pub use user::{NewUser, User, UserDraft, UserField, UserId};
