//! Application settings loaded from environment variables.

use std::env;
use std::fmt;

use chrono::Duration;

use super::constants::{
    ANY_ORIGIN, DEFAULT_ACCESS_TOKEN_TTL_MINUTES, DEFAULT_BASE_PATH, DEFAULT_JWT_SECRET,
    DEFAULT_REFRESH_TOKEN_TTL_DAYS, MAX_ACCESS_TOKEN_TTL_MINUTES, MAX_REFRESH_TOKEN_TTL_DAYS,
    MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "dev" | "development" | "test" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(AppError::config(format!("unknown APP_ENV '{}'", other))),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    jwt_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
    pub base_path: String,
    pub allowed_origins: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("jwt_secret", &"[REDACTED]")
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .field("refresh_token_ttl_days", &self.refresh_token_ttl_days)
            .field("base_path", &self.base_path)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Fails in production when `JWT_SECRET` is unset, left at the development
    /// default, or shorter than the minimum length.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::parse(&lookup("APP_ENV").unwrap_or_default())?;
        let jwt_secret = resolve_secret(environment, lookup("JWT_SECRET"))?;

        let access_token_ttl_minutes = parse_ttl(
            &lookup,
            "ACCESS_TOKEN_TTL_MINUTES",
            DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
            MAX_ACCESS_TOKEN_TTL_MINUTES,
        )?;
        let refresh_token_ttl_days = parse_ttl(
            &lookup,
            "REFRESH_TOKEN_TTL_DAYS",
            DEFAULT_REFRESH_TOKEN_TTL_DAYS,
            MAX_REFRESH_TOKEN_TTL_DAYS,
        )?;

        let base_path = normalize_base_path(
            &lookup("BASE_PATH").unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
        );

        let allowed_origins = parse_origins(
            &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| ANY_ORIGIN.to_string()),
        );

        Ok(Self {
            environment,
            jwt_secret,
            access_token_ttl_minutes,
            refresh_token_ttl_days,
            base_path,
            allowed_origins,
        })
    }

    /// Access token lifetime.
    pub fn access_token_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_ttl_minutes)
    }

    /// Refresh token lifetime.
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_ttl_days)
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

fn resolve_secret(environment: Environment, configured: Option<String>) -> AppResult<String> {
    let secret = configured.filter(|s| !s.is_empty());

    match (environment, secret) {
        (Environment::Production, None) => Err(AppError::config(
            "JWT_SECRET environment variable must be set in production",
        )),
        (Environment::Production, Some(secret)) if secret == DEFAULT_JWT_SECRET => Err(
            AppError::config("JWT_SECRET must not use the development default in production"),
        ),
        (Environment::Production, Some(secret)) if secret.len() < MIN_JWT_SECRET_LENGTH => {
            Err(AppError::config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )))
        }
        (Environment::Production, Some(secret)) => Ok(secret),
        (Environment::Development, Some(secret)) => {
            if secret.len() < MIN_JWT_SECRET_LENGTH {
                tracing::warn!(
                    "JWT_SECRET is shorter than {} characters; this is rejected in production",
                    MIN_JWT_SECRET_LENGTH
                );
            }
            Ok(secret)
        }
        (Environment::Development, None) => {
            tracing::warn!("JWT_SECRET not set, using insecure default for development");
            Ok(DEFAULT_JWT_SECRET.to_string())
        }
    }
}

/// Parse a lifetime in `1..=max`, falling back to `default` when unset.
fn parse_ttl<F>(lookup: &F, key: &str, default: i64, max: i64) -> AppResult<i64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(AppError::config(format!(
            "{} must be an integer between 1 and {}, got '{}'",
            key, max, raw
        ))),
    }
}

/// `""`, `"/"` and `"api/"` become `""`, `""` and `"/api"`.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![ANY_ORIGIN.to_string()]
    } else {
        origins
    }
}
