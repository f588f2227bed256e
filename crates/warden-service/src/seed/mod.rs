//! Idempotent bootstrap of the permission catalog, the built-in roles,
//! and the initial super-admin account.

use std::sync::Arc;

use tracing::info;

use warden_auth::rbac::catalog::{BUILT_IN_ROLES, CATALOG};
use warden_core::config::SeedConfig;
use warden_core::result::AppResult;
use warden_core::traits::{PasswordHasher, PermissionStore, RoleStore, UserStore};
use warden_entity::{Permission, Role, User};

/// Seeds the stores with the static catalog and built-in roles.
///
/// Every step is an "ensure" rather than a "create": re-running the
/// seeder against an already seeded store changes nothing, so it is
/// safe to run unconditionally at every startup.
#[derive(Clone)]
pub struct Seeder {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    permissions: Arc<dyn PermissionStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl std::fmt::Debug for Seeder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seeder").finish_non_exhaustive()
    }
}

impl Seeder {
    /// Creates a new seeder over the given stores.
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        permissions: Arc<dyn PermissionStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            roles,
            permissions,
            hasher,
        }
    }

    /// Runs the full seed sequence: catalog, roles, then the initial
    /// super-admin when configured.
    pub async fn run(&self, config: &SeedConfig) -> AppResult<()> {
        self.ensure_catalog().await?;
        self.ensure_roles().await?;
        if config.enabled {
            self.ensure_super_admin(config).await?;
        }
        Ok(())
    }

    async fn ensure_catalog(&self) -> AppResult<()> {
        let mut created = 0usize;
        for &(name, description) in CATALOG {
            if self.permissions.find_by_name(name).await?.is_some() {
                continue;
            }
            // The canonical name splits at the first colon; an action
            // may itself contain colons ("auth:profile:read").
            let (resource, action) = name.split_once(':').unwrap_or((name, ""));
            self.permissions
                .create(&Permission::new(resource, action, description.to_string()))
                .await?;
            created += 1;
        }
        if created > 0 {
            info!(created, "Seeded permission catalog");
        }
        Ok(())
    }

    async fn ensure_roles(&self) -> AppResult<()> {
        for &(name, description, permission_names) in BUILT_IN_ROLES {
            if self.roles.find_by_name(name).await?.is_some() {
                continue;
            }

            let mut permission_ids = Vec::with_capacity(permission_names.len());
            for permission_name in permission_names {
                if let Some(perm) = self.permissions.find_by_name(permission_name).await? {
                    permission_ids.push(perm.id);
                }
            }

            self.roles
                .create(&Role::new(name, description.to_string(), permission_ids, true))
                .await?;
            info!(role = name, "Seeded built-in role");
        }
        Ok(())
    }

    async fn ensure_super_admin(&self, config: &SeedConfig) -> AppResult<()> {
        if self.users.exists_by_email(&config.admin_email).await? {
            return Ok(());
        }

        let hash = self.hasher.hash(&config.admin_password).await?;
        let mut admin = User::register(&config.admin_email, hash, "Administrator".to_string());

        if let Some(role) = self.roles.find_by_name("super_admin").await? {
            let resolved = self.permissions.find_by_ids(&role.permission_ids).await?;
            admin.assign_role(role.id, resolved.into_iter().map(|p| p.name).collect());
        }

        self.users.create(&admin).await?;
        info!(email = %config.admin_email, "Seeded initial super-admin account");
        Ok(())
    }
}
