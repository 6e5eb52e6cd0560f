//! User service - Profile reads and display-name updates.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::CredentialStore;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Change the display name of an existing user
    async fn update_display_name(&self, id: Uuid, name: String) -> AppResult<User>;
}

/// Concrete implementation of UserService over a credential store.
pub struct UserManager<S: CredentialStore + ?Sized> {
    store: Arc<S>,
}

impl<S: CredentialStore + ?Sized> UserManager<S> {
    /// Create new user service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: CredentialStore + ?Sized> UserService for UserManager<S> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.store.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_display_name(&self, id: Uuid, name: String) -> AppResult<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("name required"));
        }

        self.store.update_display_name(id, name.to_string()).await
    }
}
