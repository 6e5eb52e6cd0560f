//! Domain layer - Core business entities and logic
//!
//! Contains the credential record and the password hashing value object.
//! Nothing here knows about HTTP or storage.

pub mod password;
pub mod user;

pub use password::{hash_password, verify_password, Password};
pub use user::{User, UserResponse};
