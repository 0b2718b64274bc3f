//! Domain layer - Core business entities
//!
//! Plain data types shared by the service, persistence and HTTP layers.

pub mod user;

pub use user::{User, UserDraft, UserFields, UserId};
