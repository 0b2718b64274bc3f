//! SGU Server - user record management API
//!
//! A CRUD backend for a single "user" record (full name, email, phone)
//! served over HTTP and stored in PostgreSQL. The one business rule is that
//! no two users share an email.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Use cases and the email uniqueness rule
//! - **infra**: Database connection, migrations and repository
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserFields, UserId};
pub use errors::{AppError, AppResult};
