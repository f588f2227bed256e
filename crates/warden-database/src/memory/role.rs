//! In-memory role store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::RoleStore;
use warden_entity::Role;

/// Role storage over a concurrent map, keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    roles: DashMap<Uuid, Role>,
}

impl InMemoryRoleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn create(&self, role: &Role) -> AppResult<Role> {
        let needle = role.name.to_lowercase();
        if self
            .roles
            .iter()
            .any(|entry| entry.value().name.to_lowercase() == needle)
        {
            return Err(AppError::already_exists(
                "A role with this name already exists",
            ));
        }
        self.roles.insert(role.id, role.clone());
        Ok(role.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        Ok(self.roles.get(&id).map(|r| r.clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let needle = name.to_lowercase();
        Ok(self
            .roles
            .iter()
            .find(|entry| entry.value().name.to_lowercase() == needle)
            .map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.iter().map(|e| e.value().clone()).collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }
}
