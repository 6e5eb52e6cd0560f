//! HTTP request handlers.

pub mod account_handler;
pub mod auth_handler;
pub mod health_handler;

pub use account_handler::account_routes;
pub use auth_handler::{auth_routes, session_routes};
pub use health_handler::health;

use crate::errors::AppError;

/// A verified token whose subject is gone from the store is reported as an
/// authentication failure, not as a missing resource.
pub(crate) fn hide_missing_identity(err: AppError) -> AppError {
    match err {
        AppError::NotFound => AppError::Unauthorized,
        other => other,
    }
}
