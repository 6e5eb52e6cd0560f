//! Infrastructure layer - Storage behind the domain.
//!
//! Durable backends plug in by implementing [`CredentialStore`].

pub mod repositories;

pub use repositories::{CredentialStore, InMemoryCredentialStore};

#[cfg(test)]
pub use repositories::MockCredentialStore;
