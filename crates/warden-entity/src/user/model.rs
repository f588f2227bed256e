//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::normalize_email;

/// A registered identity in the Warden system.
///
/// `permissions` is a denormalized snapshot of the permission names
/// resolved from the assigned role. It is refreshed on role assignment
/// and embedded into every issued token; already-issued tokens keep the
/// snapshot they were minted with until they expire or are refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Normalized email address (unique natural key).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// Assigned role, if any.
    pub role_id: Option<Uuid>,
    /// Cached permission-name snapshot resolved from the role.
    pub permissions: Vec<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh user from registration data. The email is
    /// normalized; accounts start active, unverified, and role-less.
    pub fn register(email: &str, password_hash: String, full_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            password_hash,
            full_name,
            is_active: true,
            is_verified: false,
            role_id: None,
            permissions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the cached permission snapshot and role reference.
    /// Only role assignment changes what newly issued tokens contain.
    pub fn assign_role(&mut self, role_id: Uuid, permissions: Vec<String>) {
        self.role_id = Some(role_id);
        self.permissions = permissions;
        self.updated_at = Utc::now();
    }

    /// Replace the stored password hash.
    pub fn update_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Update profile fields.
    pub fn update_profile(&mut self, full_name: Option<String>) {
        if let Some(name) = full_name {
            self.full_name = name;
        }
        self.updated_at = Utc::now();
    }

    /// Deactivate the account.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_normalizes_email() {
        let user = User::register(" New@User.Org ", "hash".into(), "New User".into());
        assert_eq!(user.email, "new@user.org");
        assert!(user.is_active);
        assert!(!user.is_verified);
        assert!(user.role_id.is_none());
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn test_assign_role_overwrites_snapshot() {
        let mut user = User::register("a@b.c", "hash".into(), "A".into());
        let role_id = Uuid::new_v4();
        user.assign_role(role_id, vec!["users:read".into()]);
        assert_eq!(user.role_id, Some(role_id));
        assert_eq!(user.permissions, vec!["users:read".to_string()]);

        user.assign_role(role_id, vec!["users:list".into()]);
        assert_eq!(user.permissions, vec!["users:list".to_string()]);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::register("a@b.c", "secret-hash".into(), "A".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
