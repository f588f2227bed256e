//! Administration of role assignments and the catalog.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::{PermissionStore, RoleStore, UserStore};
use warden_entity::{Permission, Role, User};

/// Handles role assignment and catalog listing.
#[derive(Clone)]
pub struct AccessService {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    permissions: Arc<dyn PermissionStore>,
}

impl std::fmt::Debug for AccessService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessService").finish_non_exhaustive()
    }
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        permissions: Arc<dyn PermissionStore>,
    ) -> Self {
        Self {
            users,
            roles,
            permissions,
        }
    }

    /// Assigns a role to a user, refreshing the user's permission
    /// snapshot from the role's current permission set.
    ///
    /// Tokens issued before this call keep their old snapshot until
    /// they expire or are refreshed. Role permission ids that no longer
    /// resolve are dropped from the snapshot rather than failing the
    /// assignment.
    pub async fn assign_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<User> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let role = self
            .roles
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))?;

        let resolved = self.permissions.find_by_ids(&role.permission_ids).await?;
        let names: Vec<String> = resolved.into_iter().map(|p| p.name).collect();

        user.assign_role(role.id, names);
        let updated = self.users.update(&user).await?;

        info!(user_id = %user_id, role = %role.name, "Role assigned");
        Ok(updated)
    }

    /// Lists every role.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.roles.list_all().await
    }

    /// Lists the whole permission catalog.
    pub async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.permissions.list_all().await
    }
}
