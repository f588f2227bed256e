//! In-memory permission store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_core::result::AppResult;
use warden_core::traits::PermissionStore;
use warden_entity::Permission;

/// Permission catalog storage over a concurrent map, keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryPermissionStore {
    permissions: DashMap<Uuid, Permission>,
}

impl InMemoryPermissionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionStore for InMemoryPermissionStore {
    async fn create(&self, permission: &Permission) -> AppResult<Permission> {
        if self
            .permissions
            .iter()
            .any(|entry| entry.value().name == permission.name)
        {
            return Err(AppError::already_exists(
                "A permission with this name already exists",
            ));
        }
        self.permissions.insert(permission.id, permission.clone());
        Ok(permission.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Permission>> {
        Ok(self.permissions.get(&id).map(|p| p.clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Permission>> {
        Ok(self
            .permissions
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> AppResult<Vec<Permission>> {
        let mut perms: Vec<Permission> =
            self.permissions.iter().map(|e| e.value().clone()).collect();
        perms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(perms)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Permission>> {
        let mut perms: Vec<Permission> = ids
            .iter()
            .filter_map(|id| self.permissions.get(id).map(|p| p.clone()))
            .collect();
        perms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(perms)
    }
}
