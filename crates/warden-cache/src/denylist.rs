//! Token denylist — the `RevocationStore` implementation.
//!
//! Revoked jtis are cache entries whose TTL equals the remaining
//! lifetime of the token they revoke, so the denylist never grows past
//! the set of tokens that could still be presented.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use warden_core::result::AppResult;
use warden_core::traits::cache::CacheProvider;
use warden_core::traits::revocation::RevocationStore;

use crate::keys;
use crate::provider::CacheManager;

/// Marker value stored for a revoked jti.
const REVOKED: &str = "revoked";

/// Cache-backed denylist of revoked token identifiers.
#[derive(Debug, Clone)]
pub struct TokenDenylist {
    cache: Arc<CacheManager>,
}

impl TokenDenylist {
    /// Create a denylist over the given cache.
    pub fn new(cache: Arc<CacheManager>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl RevocationStore for TokenDenylist {
    async fn revoke(&self, jti: &str, ttl_seconds: u64) -> AppResult<()> {
        // Minimum 1 second so a token revoked at the edge of its life
        // still gets an entry rather than an immediate expiry.
        let ttl = Duration::from_secs(ttl_seconds.max(1));
        self.cache
            .set(&keys::revoked_token(jti), REVOKED, ttl)
            .await?;
        debug!(jti, ttl_seconds, "Token revoked");
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        Ok(self.cache.get(&keys::revoked_token(jti)).await?.is_some())
    }

    async fn revoke_if_unrevoked(&self, jti: &str, ttl_seconds: u64) -> AppResult<bool> {
        let ttl = Duration::from_secs(ttl_seconds.max(1));
        let fresh = self
            .cache
            .set_nx(&keys::revoked_token(jti), REVOKED, ttl)
            .await?;
        if !fresh {
            debug!(jti, "Revocation lost to an earlier writer");
        }
        Ok(fresh)
    }
}
