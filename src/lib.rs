//! Credential Service - registration, password login and bearer tokens
//!
//! Accounts are kept in an in-memory credential store. Passwords are
//! hashed with Argon2id and sessions are carried by a pair of HS256
//! JWTs: a short-lived access token and a longer-lived refresh token.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and password hashing
//! - **services**: Token issuing/verification, auth and profile use cases
//! - **infra**: Credential store
//! - **api**: HTTP handlers, auth guard middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Validate configuration
//! APP_ENV=production JWT_SECRET=... cargo run -- check-config
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
pub use domain::{Password, User, UserResponse};
pub use errors::{AppError, AppResult};
pub use services::{TokenPair, TokenService};
