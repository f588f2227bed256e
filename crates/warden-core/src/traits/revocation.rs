//! Token revocation (denylist) port.

use async_trait::async_trait;

use crate::result::AppResult;

/// Denylist of token identifiers (jti) with per-entry TTL.
///
/// An entry's TTL is sized to the remaining lifetime of the token it
/// revokes, so the denylist never outgrows the set of live tokens.
/// Absence of an entry means "not known to be revoked", nothing more —
/// the token may still be expired or malformed.
#[async_trait]
pub trait RevocationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Mark a jti as revoked for `ttl_seconds`. Idempotent: revoking an
    /// already-revoked jti has the same observable effect as revoking once.
    async fn revoke(&self, jti: &str, ttl_seconds: u64) -> AppResult<()>;

    /// Whether the jti is currently revoked.
    async fn is_revoked(&self, jti: &str) -> AppResult<bool>;

    /// Atomically revoke the jti only if it was not already revoked.
    ///
    /// Returns `true` if this call performed the revocation, `false` if
    /// the jti was already revoked. Used by the refresh flow to make
    /// refresh tokens single-use even under concurrent replay.
    async fn revoke_if_unrevoked(&self, jti: &str, ttl_seconds: u64) -> AppResult<bool>;
}
