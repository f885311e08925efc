use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

use crate::error::{AccountError, AccountResult};

/// Well-formed Argon2id hash with the default cost parameters that no
/// password matches. Sign-in compares against it when the email is unknown.
pub const UNKNOWN_ACCOUNT_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$ZHVtbXktaGFzaC1mb3ItdW5rbm93bi1hY2NvdW50cyE";

/// One-way password hashing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> AccountResult<String>;

    /// `Ok(false)` on mismatch. A stored hash that cannot be parsed is an
    /// error, not a mismatch.
    async fn compare(&self, password: &str, hash: &str) -> AccountResult<bool>;
}

/// Argon2id with the crate defaults; hashes are PHC strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn hash_blocking(password: &str) -> AccountResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::PasswordHash(e.to_string()))
}

fn compare_blocking(password: &str, hash: &str) -> AccountResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| AccountError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> AccountResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|e| AccountError::Internal(format!("Hashing task failed: {}", e)))?
    }

    async fn compare(&self, password: &str, hash: &str) -> AccountResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || compare_blocking(&password, &hash))
            .await
            .map_err(|e| AccountError::Internal(format!("Hashing task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_compare() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("password").await.unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.compare("password", &hash).await.unwrap());
        assert!(!hasher.compare("wrong-password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("password").await.unwrap();
        let second = hasher.hash("password").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_account_hash_parses_and_never_matches() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.compare("password", UNKNOWN_ACCOUNT_HASH).await.unwrap());
        assert!(!hasher.compare("", UNKNOWN_ACCOUNT_HASH).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = Argon2PasswordHasher::new();
        let result = hasher.compare("password", "plain-text").await;
        assert!(matches!(result, Err(AccountError::PasswordHash(_))));
    }
}
