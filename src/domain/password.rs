//! Password value object - Domain layer password handling.
//!
//! Hashing uses Argon2id with a random salt per hash. Plaintext is cut to
//! [`MAX_PASSWORD_BYTES`] on both the hash and the verify path, so two
//! passwords sharing their first 72 bytes are interchangeable (as with bcrypt).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::config::{MAX_PASSWORD_BYTES, MIN_PASSWORD_LENGTH};
use crate::errors::{AppError, AppResult};

/// Hash verified against when a login names an unknown email, so the
/// response time does not reveal whether the account exists.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("not-a-real-password-for-timing").ok());

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a bad request error if the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::bad_request(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = hash_password(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from the store).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        verify_password(plain_text, &self.hash)
    }

    /// Burn the same amount of work as a real verification, always failing.
    pub fn verify_dummy(plain_text: &str) -> bool {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = verify_password(plain_text, hash);
        }
        false
    }

    /// Whether part of `plain_text` is ignored by the truncation policy.
    pub fn exceeds_max_len(plain_text: &str) -> bool {
        plain_text.len() > MAX_PASSWORD_BYTES
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

/// Bytes actually fed to the hash function.
fn truncated(plain_text: &str) -> &[u8] {
    let bytes = plain_text.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}

/// Hash a password using Argon2id, returning a PHC string.
pub fn hash_password(plain_text: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2()
        .hash_password(truncated(plain_text), &salt)
        .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash.
///
/// The final comparison is constant-time. A hash that cannot be parsed never
/// verifies.
pub fn verify_password(plain_text: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => argon2()
            .verify_password(truncated(plain_text), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is unreadable: {}", e);
            false
        }
    }
}

#[inline]
fn argon2() -> Argon2<'static> {
    Argon2::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_and_verifies() {
        let first = hash_password("secret123").unwrap();
        let second = hash_password("secret123").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("secret123", &first));
        assert!(verify_password("secret123", &second));
        assert!(!verify_password("secret124", &first));
    }

    #[test]
    fn test_passwords_equal_in_first_72_bytes_are_interchangeable() {
        let prefix = "p".repeat(MAX_PASSWORD_BYTES);
        let p1 = format!("{}-first-tail", prefix);
        let p2 = format!("{}-a-completely-different-tail", prefix);

        let hash = hash_password(&p1).unwrap();

        // Expected: everything past byte 72 is ignored on both paths.
        assert!(verify_password(&p2, &hash));
        assert!(verify_password(&prefix, &hash));
        assert!(Password::exceeds_max_len(&p1));
        assert!(!Password::exceeds_max_len(&prefix));
    }

    #[test]
    fn test_difference_inside_limit_still_matters() {
        let mut p1 = "q".repeat(MAX_PASSWORD_BYTES);
        let hash = hash_password(&p1).unwrap();
        p1.replace_range(MAX_PASSWORD_BYTES - 1.., "z");
        assert!(!verify_password(&p1, &hash));
    }

    #[test]
    fn test_truncation_splits_multibyte_characters_consistently() {
        // 71 ASCII bytes followed by a 2-byte character straddling the limit.
        let p1 = format!("{}é", "a".repeat(MAX_PASSWORD_BYTES - 1));
        let p2 = format!("{}ë", "a".repeat(MAX_PASSWORD_BYTES - 1));
        let hash = hash_password(&p1).unwrap();
        // Both share the same first byte of their 2-byte encodings (0xC3).
        assert!(verify_password(&p2, &hash));
    }

    #[test]
    fn test_value_object_roundtrip() {
        let password = Password::new("long-enough").unwrap();
        let stored = Password::from_hash(password.into_string());
        assert!(stored.verify("long-enough"));
        assert!(!stored.verify("wrong-password"));
        assert!(format!("{:?}", stored).contains("[REDACTED]"));
    }

    #[test]
    fn test_short_password_rejected() {
        let err = Password::new("short").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!Password::verify_dummy("anything"));
    }
}
