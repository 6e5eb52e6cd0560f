//! Service Container - Centralized service access.
//!
//! Wires the credential store, token service and the services built on top
//! of them. Everything is handed out as `Arc<dyn Trait>`.

use std::sync::Arc;

use super::{AuthService, Authenticator, TokenService, UserManager, UserService};
use crate::config::Config;
use crate::infra::{CredentialStore, InMemoryCredentialStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get the backing credential store
    fn store(&self) -> Arc<dyn CredentialStore>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    store: Arc<dyn CredentialStore>,
}

impl Services {
    /// Build all services on top of an injected store.
    pub fn with_store(store: Arc<dyn CredentialStore>, config: &Config) -> Self {
        let tokens = TokenService::from_config(config);
        let auth_service = Arc::new(Authenticator::new(store.clone(), tokens));
        let user_service = Arc::new(UserManager::new(store.clone()));

        Self {
            auth_service,
            user_service,
            store,
        }
    }

    /// Build all services over a fresh, empty in-memory store.
    pub fn in_memory(config: &Config) -> Self {
        Self::with_store(Arc::new(InMemoryCredentialStore::new()), config)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn store(&self) -> Arc<dyn CredentialStore> {
        self.store.clone()
    }
}
