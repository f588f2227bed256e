//! Registration, login, refresh, and logout.

use std::sync::Arc;

use tracing::{info, warn};

use warden_auth::password::PasswordPolicy;
use warden_auth::token::{TokenCodec, TokenKind, TokenPair};
use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::{PasswordHasher, RevocationStore, UserStore};
use warden_entity::{User, user::normalize_email};

/// Handles the session lifecycle.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    denylist: Arc<dyn RevocationStore>,
    codec: TokenCodec,
    policy: PasswordPolicy,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        denylist: Arc<dyn RevocationStore>,
        codec: TokenCodec,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            users,
            hasher,
            denylist,
            codec,
            policy,
        }
    }

    /// Registers a new account.
    ///
    /// Accounts start active, unverified, and without a role; they gain
    /// permissions only through explicit role assignment.
    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> AppResult<User> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        if self.users.exists_by_email(&email).await? {
            return Err(AppError::already_exists(
                "A user with this email already exists",
            ));
        }

        self.policy.check(password)?;

        let password_hash = self.hasher.hash(password).await?;
        let user = User::register(&email, password_hash, full_name.trim().to_string());
        let created = self.users.create(&user).await?;

        info!(user_id = %created.id, "Registered new user");
        Ok(created)
    }

    /// Authenticates credentials and issues a token pair embedding the
    /// user's current permission snapshot.
    ///
    /// Every credential failure (unknown email, wrong password) maps to
    /// the same error so callers cannot probe which emails exist. Only
    /// a deactivated account is reported distinctly, and only after the
    /// password verified.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let email = normalize_email(email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Burn comparable time on a throwaway verification so
                // unknown emails are not distinguishable by latency.
                let _ = self.hasher.verify(password, DUMMY_HASH).await;
                return Err(AppError::invalid_credentials());
            }
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::invalid_credentials());
        }

        if !user.is_active {
            return Err(AppError::account_disabled());
        }

        let pair = self
            .codec
            .issue_pair(user.id, &user.email, &user.permissions)?;
        info!(user_id = %user.id, "User logged in");
        Ok(pair)
    }

    /// Exchanges a refresh token for a fresh pair.
    ///
    /// The presented token is consumed atomically: of any number of
    /// concurrent exchanges of the same token, exactly one succeeds.
    /// The new pair embeds the user's permission snapshot as it stands
    /// now, so a refresh picks up role changes made since login.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.codec.decode(refresh_token)?;

        if claims.kind != TokenKind::Refresh {
            return Err(AppError::invalid_token(
                "An access token cannot be used for refresh",
            ));
        }

        // A consumed token is rejected as such before any account state
        // is consulted, so a replay always reads as `TokenRevoked`.
        let jti = claims.jti.to_string();
        if self.denylist.is_revoked(&jti).await? {
            warn!(user_id = %claims.sub, jti = %claims.jti, "Refresh token replayed");
            return Err(AppError::token_revoked("Refresh token has already been used"));
        }

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::not_found("Token subject no longer exists"))?;

        if !user.is_active {
            return Err(AppError::account_disabled());
        }

        // Consume before issuing. The denylist entry lives only as long
        // as the token it blocks would have.
        let consumed = self
            .denylist
            .revoke_if_unrevoked(&jti, claims.remaining_ttl_seconds())
            .await?;
        if !consumed {
            warn!(user_id = %user.id, jti = %claims.jti, "Refresh token replayed");
            return Err(AppError::token_revoked("Refresh token has already been used"));
        }

        let pair = self
            .codec
            .issue_pair(user.id, &user.email, &user.permissions)?;
        info!(user_id = %user.id, "Session refreshed");
        Ok(pair)
    }

    /// Revokes the presented access token for its remaining lifetime.
    ///
    /// Idempotent: logging out twice with the same token succeeds both
    /// times. An expired or malformed token still fails decode.
    pub async fn logout(&self, access_token: &str) -> AppResult<()> {
        let claims = self.codec.decode(access_token)?;

        if claims.kind != TokenKind::Access {
            return Err(AppError::invalid_token("Logout expects an access token"));
        }

        self.denylist
            .revoke(&claims.jti.to_string(), claims.remaining_ttl_seconds())
            .await?;

        info!(user_id = %claims.sub, "User logged out");
        Ok(())
    }
}

/// A syntactically valid Argon2 hash that matches no password, used to
/// equalize login timing when the email is unknown.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$MDAwMDAwMDAwMDAwMDAwMA$5c0nXXBNNWGmm3AisauxNV8kSlrLLo8W3rZAyTLOSrc";
