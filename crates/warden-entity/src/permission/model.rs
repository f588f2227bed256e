//! Permission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single grantable action on a resource.
///
/// The canonical name is derived deterministically from the resource and
/// action (`"{resource}:{action}"`, both lowercased) and is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Unique permission identifier.
    pub id: Uuid,
    /// Canonical `resource:action` name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Resource half of the name, lowercased.
    pub resource: String,
    /// Action half of the name, lowercased.
    pub action: String,
    /// When the permission was created.
    pub created_at: DateTime<Utc>,
    /// When the permission was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Permission {
    /// Build a new permission; the name is derived from resource + action.
    pub fn new(resource: &str, action: &str, description: String) -> Self {
        let resource = resource.trim().to_lowercase();
        let action = action.trim().to_lowercase();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: Self::name_for(&resource, &action),
            description,
            resource,
            action,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derive the canonical permission name for a resource and action.
    pub fn name_for(resource: &str, action: &str) -> String {
        format!(
            "{}:{}",
            resource.trim().to_lowercase(),
            action.trim().to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_derived() {
        let perm = Permission::new(" Users ", "CREATE", "create users".into());
        assert_eq!(perm.name, "users:create");
        assert_eq!(perm.resource, "users");
        assert_eq!(perm.action, "create");
    }
}
