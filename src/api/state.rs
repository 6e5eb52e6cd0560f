//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::CredentialStore;
use crate::services::{AuthService, ServiceContainer, Services, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Credential store (health probes only; handlers go through services)
    pub store: Arc<dyn CredentialStore>,
}

impl AppState {
    /// Create application state over a fresh in-memory credential store.
    pub fn from_config(config: &Config) -> Self {
        Self::from_container(&Services::in_memory(config))
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            store: container.store(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            store,
        }
    }
}
