//! Claim set embedded in access and refresh tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The payload embedded in every issued token.
///
/// Wire contract: `sub`, `email`, `permissions`, `exp`, `iat`, `jti`,
/// `type`. The permission list is a point-in-time snapshot taken at
/// issuance; a later role change does not alter already-issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Email at the time of issuance.
    pub email: String,
    /// Ordered snapshot of the user's permission names.
    pub permissions: Vec<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Unique token identifier; the revocation key.
    pub jti: Uuid,
    /// Token kind: access or refresh.
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived token presented on API requests.
    Access,
    /// Long-lived token exchanged for a new pair.
    Refresh,
}

impl TokenKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns the remaining lifetime in seconds (0 if expired).
    ///
    /// Used to size revocation entries so a denylist entry never
    /// outlives the token it revokes.
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
