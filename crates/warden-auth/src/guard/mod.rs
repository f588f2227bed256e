//! Request-side authentication and permission enforcement.

use std::sync::Arc;

use tracing::debug;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::RevocationStore;

use crate::rbac;
use crate::token::{Claims, TokenCodec, TokenKind};

/// Authenticates bearer tokens and enforces permission requirements.
///
/// Authentication failures (bad token, wrong kind, revoked) and
/// authorization failures (valid identity, insufficient grants) are
/// kept distinct so callers can map them to 401 and 403 respectively.
#[derive(Clone)]
pub struct AccessGuard {
    codec: TokenCodec,
    denylist: Arc<dyn RevocationStore>,
}

impl std::fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGuard").finish_non_exhaustive()
    }
}

impl AccessGuard {
    /// Creates a guard over the given codec and revocation store.
    pub fn new(codec: TokenCodec, denylist: Arc<dyn RevocationStore>) -> Self {
        Self { codec, denylist }
    }

    /// Validates an access token end to end: signature, expiry, kind,
    /// and revocation state.
    pub async fn authenticate(&self, token: &str) -> AppResult<Claims> {
        let claims = self.codec.decode(token)?;

        if claims.kind != TokenKind::Access {
            debug!(kind = %claims.kind, "Rejected non-access token on an authenticated route");
            return Err(AppError::invalid_token(
                "A refresh token cannot be used for authentication",
            ));
        }

        if self.denylist.is_revoked(&claims.jti.to_string()).await? {
            debug!(jti = %claims.jti, "Rejected revoked access token");
            return Err(AppError::token_revoked("Token has been revoked"));
        }

        Ok(claims)
    }

    /// Requires every listed permission, naming the requirement on
    /// denial.
    pub fn authorize_all(&self, claims: &Claims, required: &[&str]) -> AppResult<()> {
        if rbac::has_all_permissions(&claims.permissions, required) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Missing required permissions: {}",
                required.join(", ")
            )))
        }
    }

    /// Requires at least one of the listed permissions.
    pub fn authorize_any(&self, claims: &Claims, required: &[&str]) -> AppResult<()> {
        if rbac::has_any_permission(&claims.permissions, required) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Requires one of: {}",
                required.join(", ")
            )))
        }
    }
}
