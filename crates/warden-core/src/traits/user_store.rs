//! User persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use warden_entity::User;

use crate::result::AppResult;

/// Persistent storage of user identities.
///
/// Email lookups must be case-insensitive on the store side as well —
/// callers normalize first, but the store must not rely on that alone
/// for uniqueness enforcement.
///
/// Both the optional-returning lookup and the bool-returning existence
/// check are part of the contract: call sites use them for different
/// branching without redundant fetches.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new user and return the stored entity.
    async fn create(&self, user: &User) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Update an existing user and return the updated entity.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Whether a user with this email exists, case-insensitively.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
}
