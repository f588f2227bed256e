//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named collection of permissions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Unique, normalized (lowercased, trimmed) role name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// IDs of the permissions granted by this role.
    pub permission_ids: Vec<Uuid>,
    /// System roles must not be deleted.
    pub is_system: bool,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Build a new role with a normalized name.
    pub fn new(name: &str, description: String, permission_ids: Vec<Uuid>, is_system: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_lowercase(),
            description,
            permission_ids,
            is_system,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_name() {
        let role = Role::new("  Super_Admin ", String::new(), vec![], true);
        assert_eq!(role.name, "super_admin");
        assert!(role.is_system);
    }
}
