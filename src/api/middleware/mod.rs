//! API middleware.

mod auth;
mod cors;
mod security_headers;

pub use auth::{auth_middleware, authenticate, bearer_token, CurrentUser};
pub use cors::cors_layer;
pub use security_headers::with_security_headers;
