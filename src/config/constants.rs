//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;

/// Default refresh token lifetime in days
pub const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Upper bound for `ACCESS_TOKEN_TTL_MINUTES` (one week)
pub const MAX_ACCESS_TOKEN_TTL_MINUTES: i64 = 7 * 24 * 60;

/// Upper bound for `REFRESH_TOKEN_TTL_DAYS`
pub const MAX_REFRESH_TOKEN_TTL_DAYS: i64 = 365;

/// Clock skew tolerated when checking `exp`, in seconds
pub const TOKEN_LEEWAY_SECONDS: u64 = 5;

/// Signing secret used when `JWT_SECRET` is unset outside production.
/// Never accepted in production.
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Minimum JWT secret length required in production
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Passwords
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Passwords are truncated to this many bytes before hashing and verifying
/// (bcrypt-compatible limit).
pub const MAX_PASSWORD_BYTES: usize = 72;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 10000;

/// Default prefix for all API routes
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Wildcard accepted in `ALLOWED_ORIGINS`
pub const ANY_ORIGIN: &str = "*";
