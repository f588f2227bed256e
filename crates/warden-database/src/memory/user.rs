//! In-memory user store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::UserStore;
use warden_entity::User;

/// User storage over a concurrent map, keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(&self, email: &str, excluding: Option<Uuid>) -> bool {
        let needle = email.to_lowercase();
        self.users.iter().any(|entry| {
            entry.value().email.to_lowercase() == needle && Some(*entry.key()) != excluding
        })
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: &User) -> AppResult<User> {
        if self.email_taken(&user.email, None) {
            return Err(AppError::already_exists(
                "A user with this email already exists",
            ));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let needle = email.to_lowercase();
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email.to_lowercase() == needle)
            .map(|entry| entry.value().clone()))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        if !self.users.contains_key(&user.id) {
            return Err(AppError::not_found("User not found"));
        }
        if self.email_taken(&user.email, Some(user.id)) {
            return Err(AppError::already_exists(
                "A user with this email already exists",
            ));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.email_taken(email, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(email: &str) -> User {
        User::register(email, "$argon2id$fake".to_string(), "Test User".to_string())
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_insensitive() {
        let store = InMemoryUserStore::new();
        store.create(&sample("user@example.com")).await.unwrap();

        let err = store.create(&sample("USER@example.com")).await.unwrap_err();
        assert_eq!(err.kind, warden_core::ErrorKind::AlreadyExists);
        assert!(store.exists_by_email("User@Example.Com").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_roundtrip() {
        let store = InMemoryUserStore::new();
        let mut user = store.create(&sample("a@example.com")).await.unwrap();

        user.deactivate();
        let updated = store.update(&user).await.unwrap();
        assert!(!updated.is_active);

        let fetched = store.find_by_id(user.id).await.unwrap().unwrap();
        assert!(!fetched.is_active);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let store = InMemoryUserStore::new();
        let err = store.update(&sample("ghost@example.com")).await.unwrap_err();
        assert_eq!(err.kind, warden_core::ErrorKind::NotFound);
    }
}
