//! Repository layer - Data access abstraction
//!
//! Services only see the [`CredentialStore`] trait; the in-memory store is
//! the implementation wired in by default.

mod credential_store;
mod memory;

pub use credential_store::CredentialStore;
pub use memory::InMemoryCredentialStore;

#[cfg(test)]
pub use credential_store::MockCredentialStore;
