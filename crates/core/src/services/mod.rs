//! Business logic services.

mod account;
mod content;
mod relationship;

pub use account::{AccountService, UsernameInput};
pub use content::{CommentInput, ContentService, PhotoInput};
pub use relationship::RelationshipService;
