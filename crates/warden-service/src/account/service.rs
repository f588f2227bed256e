//! Profile viewing, profile updates, and password management.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use tracing::{debug, info};
use uuid::Uuid;

use warden_auth::password::PasswordPolicy;
use warden_cache::keys;
use warden_cache::provider::CacheManager;
use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::{CacheProvider, PasswordHasher, UserStore};
use warden_entity::{User, user::normalize_email};

/// Data for updating one's own profile.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileRequest {
    /// New full name, if changing.
    pub full_name: Option<String>,
}

/// Handles self-service account operations.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    cache: Arc<CacheManager>,
    policy: PasswordPolicy,
    reset_token_ttl: Duration,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        cache: Arc<CacheManager>,
        policy: PasswordPolicy,
        reset_token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            hasher,
            cache,
            policy,
            reset_token_ttl,
        }
    }

    /// Fetches the caller's own profile.
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the caller's own profile fields.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> AppResult<User> {
        let mut user = self.get_profile(user_id).await?;

        if let Some(name) = &req.full_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Full name cannot be empty"));
            }
        }

        user.update_profile(req.full_name.map(|n| n.trim().to_string()));
        self.users.update(&user).await
    }

    /// Changes the caller's password after verifying the current one.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let mut user = self.get_profile(user_id).await?;

        if !self
            .hasher
            .verify(current_password, &user.password_hash)
            .await?
        {
            return Err(AppError::invalid_credentials());
        }

        self.policy.check(new_password)?;

        let hash = self.hasher.hash(new_password).await?;
        user.update_password(hash);
        self.users.update(&user).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    /// Starts a password reset.
    ///
    /// Returns the single-use reset token when the email is known and
    /// `None` otherwise. Callers must present the same outward response
    /// either way; whether an email is registered is not disclosed.
    pub async fn request_password_reset(&self, email: &str) -> AppResult<Option<String>> {
        let email = normalize_email(email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                debug!("Password reset requested for unknown email");
                return Ok(None);
            }
        };

        let token = generate_reset_token();
        self.cache
            .set(
                &keys::password_reset(&token),
                &user.id.to_string(),
                self.reset_token_ttl,
            )
            .await?;

        info!(user_id = %user.id, "Password reset token issued");
        Ok(Some(token))
    }

    /// Completes a password reset with a previously issued token.
    ///
    /// The token is consumed before the password changes, so it cannot
    /// be replayed even if the update fails.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> AppResult<()> {
        let key = keys::password_reset(token);
        let user_id = self
            .cache
            .get(&key)
            .await?
            .ok_or_else(|| AppError::invalid_token("Reset token is invalid or has expired"))?;
        self.cache.delete(&key).await?;

        let user_id = Uuid::parse_str(&user_id)
            .map_err(|_| AppError::internal("Corrupt reset token mapping"))?;

        self.policy.check(new_password)?;

        let mut user = self.get_profile(user_id).await?;
        let hash = self.hasher.hash(new_password).await?;
        user.update_password(hash);
        self.users.update(&user).await?;

        info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }
}

/// 32 bytes of CSPRNG output, URL-safe base64 encoded.
fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes[..]);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_auth::password::Argon2Hasher;
    use warden_cache::memory::MemoryCacheProvider;
    use warden_core::ErrorKind;
    use warden_core::config::MemoryCacheConfig;
    use warden_database::memory::InMemoryUserStore;

    async fn fixture() -> (AccountService, Arc<InMemoryUserStore>, Uuid) {
        let users = Arc::new(InMemoryUserStore::new());
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("longpass1").await.unwrap();
        let user = User::register("me@example.com", hash, "Me".into());
        let user_id = user.id;
        users.create(&user).await.unwrap();

        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&MemoryCacheConfig::default()),
        )));
        let service = AccountService::new(
            users.clone(),
            Arc::new(hasher),
            cache,
            PasswordPolicy::with_min_length(8),
            Duration::from_secs(900),
        );
        (service, users, user_id)
    }

    #[tokio::test]
    async fn test_profile_update() {
        let (service, _, user_id) = fixture().await;
        let updated = service
            .update_profile(
                user_id,
                UpdateProfileRequest {
                    full_name: Some(" New Name ".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.full_name, "New Name");
    }

    #[tokio::test]
    async fn test_change_password_requires_current() {
        let (service, _, user_id) = fixture().await;

        let err = service
            .change_password(user_id, "wrongpass1", "newlongpass1")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);

        service
            .change_password(user_id, "longpass1", "newlongpass1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reset_flow_is_single_use() {
        let (service, _, _) = fixture().await;

        let token = service
            .request_password_reset("me@example.com")
            .await
            .unwrap()
            .unwrap();

        service.reset_password(&token, "resetpass1").await.unwrap();

        // The consumed token no longer resolves.
        let err = service
            .reset_password(&token, "another1pass")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidToken);
    }

    #[tokio::test]
    async fn test_reset_request_hides_unknown_emails() {
        let (service, _, _) = fixture().await;
        let outcome = service
            .request_password_reset("nobody@example.com")
            .await
            .unwrap();
        assert!(outcome.is_none());
    }
}
