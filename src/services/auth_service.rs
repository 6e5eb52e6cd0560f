//! Authentication service - Registration, login and token rotation.
//!
//! Password hashing lives in the domain `Password` value object; token
//! signing lives in [`TokenService`]. This service only orchestrates.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::token_service::{TokenError, TokenPair, TokenService};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::CredentialStore;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(
        &self,
        email: String,
        password: String,
        name: Option<String>,
    ) -> AppResult<User>;

    /// Check credentials and issue a token pair
    async fn login(&self, email: String, password: String) -> AppResult<TokenPair>;

    /// Exchange a refresh token for a new pair
    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair>;

    /// Verify an access token and return its subject
    fn verify_access(&self, token: &str) -> Result<Uuid, TokenError>;
}

/// Concrete implementation of AuthService over a credential store.
pub struct Authenticator<S: CredentialStore + ?Sized> {
    store: Arc<S>,
    tokens: TokenService,
}

impl<S: CredentialStore + ?Sized> Authenticator<S> {
    /// Create new auth service instance
    pub fn new(store: Arc<S>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }
}

#[async_trait]
impl<S: CredentialStore + ?Sized> AuthService for Authenticator<S> {
    async fn register(
        &self,
        email: String,
        password: String,
        name: Option<String>,
    ) -> AppResult<User> {
        // Cheap early exit; the store's atomic insert is what actually
        // guarantees uniqueness under concurrency.
        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists("Email"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.store.create(email, password_hash, name).await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenPair> {
        let user = match self.store.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Same hashing cost as a real attempt, so unknown emails
                // cannot be told apart by timing.
                Password::verify_dummy(&password);
                return Err(AppError::InvalidCredentials);
            }
        };

        if !Password::from_hash(user.password_hash.as_str()).verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = %user.id, "user logged in");
        self.tokens.issue_pair(user.id)
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let subject = self.tokens.verify_refresh(refresh_token)?;

        // Tokens outlive nothing in the store today, but a subject that no
        // longer resolves must not be handed fresh credentials.
        if self.store.find_by_id(subject).await?.is_none() {
            return Err(AppError::Unauthorized);
        }

        info!(user_id = %subject, "token pair rotated");
        self.tokens.issue_pair(subject)
    }

    fn verify_access(&self, token: &str) -> Result<Uuid, TokenError> {
        self.tokens.verify_access(token)
    }
}
