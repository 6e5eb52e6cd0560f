//! Volatile in-process credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CredentialStore;
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// email -> id
    emails: HashMap<String, Uuid>,
}

/// Credential store backed by process memory. Contents are lost on restart.
///
/// All writes go through one `RwLock`, so the uniqueness check and insert in
/// `create` are a single atomic step and readers never observe a half-applied
/// update.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    tables: RwLock<Tables>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: Option<String>,
    ) -> AppResult<User> {
        let mut tables = self.tables.write().await;

        if tables.emails.contains_key(&email) {
            return Err(AppError::already_exists("Email"));
        }

        let user = User::new(email, password_hash, name);
        tables.emails.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .emails
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn update_display_name(&self, id: Uuid, name: String) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or_not_found()?;
        user.update_name(name);
        Ok(user.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.tables.read().await.users.len())
    }
}
