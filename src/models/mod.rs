//! Data models for Bookshelf

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use user::{AuthPayload, CreateUser, NewUser, User, UserClaims};
