//! Token service - Signs and verifies access/refresh bearer tokens.
//!
//! Tokens are HS256 JWTs signed with the configured secret. Access tokens
//! carry no `type` claim; refresh tokens carry `"type": "refresh"`. Every
//! decode failure comes back as a [`TokenError`], never a panic.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, TOKEN_LEEWAY_SECONDS, TOKEN_TYPE_BEARER};
use crate::errors::{AppError, AppResult};

/// Credential class a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: Uuid,
    /// Absent on access tokens
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenType>,
    /// Unique token id
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Effective type; a missing claim means access.
    pub fn kind(&self) -> TokenType {
        self.token_type.unwrap_or(TokenType::Access)
    }
}

/// Why a token was refused. Reported to clients only as `INVALID_TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not verify")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("expected {expected} token, got {actual}")]
    WrongType {
        expected: TokenType,
        actual: TokenType,
    },
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        "INVALID_TOKEN"
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Token pair returned after login or refresh
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Refresh token, exchangeable for a new pair
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Access token lifetime in seconds
    #[schema(example = 900)]
    pub expires_in: i64,
}

/// Issues and verifies tokens. Holds only immutable key material.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("keys", &"[REDACTED]")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = TOKEN_LEEWAY_SECONDS;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_secret_bytes(),
            config.access_token_ttl(),
            config.refresh_token_ttl(),
        )
    }

    /// Issue a fresh access/refresh pair for `subject`.
    pub fn issue_pair(&self, subject: Uuid) -> AppResult<TokenPair> {
        let access_token = self.sign(subject, None, self.access_ttl)?;
        let refresh_token = self.sign(subject, Some(TokenType::Refresh), self.refresh_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// Verify an access token and return its subject.
    pub fn verify_access(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_as(token, TokenType::Access)
    }

    /// Verify a refresh token and return its subject.
    pub fn verify_refresh(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_as(token, TokenType::Refresh)
    }

    fn sign(&self, subject: Uuid, token_type: Option<TokenType>, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal(format!("Token lifetime {} is out of range", ttl)))?;

        let claims = Claims {
            sub: subject,
            token_type,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    fn verify_as(&self, token: &str, expected: TokenType) -> Result<Uuid, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        let actual = claims.kind();
        if actual != expected {
            return Err(TokenError::WrongType { expected, actual });
        }

        Ok(claims.sub)
    }
}
