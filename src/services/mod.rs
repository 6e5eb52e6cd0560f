//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the credential store. They depend
//! on abstractions (traits) for dependency inversion.

mod auth_service;
pub mod container;
mod token_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use token_service::{Claims, TokenError, TokenPair, TokenService, TokenType};
pub use user_service::{UserManager, UserService};
