//! Credential store contract.
//!
//! Storage-agnostic CRUD over [`User`] records. Lookups are exact-match;
//! emails are never case-folded.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::User;
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// Credential store trait for dependency injection.
///
/// Implementations must make `create` atomic per email (at most one
/// concurrent registration wins) and `update_display_name` atomic per id.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` if `email` is taken.
    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: Option<String>,
    ) -> AppResult<User>;

    /// Find a record by its exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a record by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Replace the display name. Fails with `NotFound` for an unknown id.
    async fn update_display_name(&self, id: Uuid, name: String) -> AppResult<User>;

    /// Number of stored records.
    async fn count(&self) -> AppResult<usize>;
}
