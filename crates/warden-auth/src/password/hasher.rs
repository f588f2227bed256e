//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::PasswordHasher;

/// Argon2id implementation of the hashing port.
///
/// Hashing and verification are CPU-bound by design, so both run on
/// the blocking thread pool rather than stalling the async runtime.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Creates a new hasher with default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }

    fn hash_blocking(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    fn verify_blocking(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> AppResult<String> {
        let plain = plain.to_string();
        tokio::task::spawn_blocking(move || Self::hash_blocking(&plain))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn verify(&self, plain: &str, hash: &str) -> AppResult<bool> {
        let plain = plain.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || Self::verify_blocking(&plain, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("correct horse battery staple").await.unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher
            .verify("correct horse battery staple", &hash)
            .await
            .unwrap());
        assert!(!hasher.verify("wrong password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = Argon2Hasher::new();
        let a = hasher.hash("same password").await.unwrap();
        let b = hasher.hash("same password").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = Argon2Hasher::new();
        let err = hasher.verify("anything", "not-a-phc-string").await.unwrap_err();
        assert_eq!(err.kind, warden_core::ErrorKind::Internal);
    }
}
