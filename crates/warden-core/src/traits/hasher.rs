//! Password hashing port.

use async_trait::async_trait;

use crate::result::AppResult;

/// One-way, salted password hashing.
///
/// The algorithm is opaque to callers; the produced hash string embeds
/// everything needed for later verification. Implementations are
/// expected to be deliberately slow.
#[async_trait]
pub trait PasswordHasher: Send + Sync + std::fmt::Debug + 'static {
    /// Hash a plaintext password.
    async fn hash(&self, plain: &str) -> AppResult<String>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    async fn verify(&self, plain: &str, hash: &str) -> AppResult<bool>;
}
