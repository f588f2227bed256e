//! Permission persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use warden_entity::Permission;

use crate::result::AppResult;

/// Persistent storage of the permission catalog.
#[async_trait]
pub trait PermissionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new permission and return the stored entity.
    async fn create(&self, permission: &Permission) -> AppResult<Permission>;

    /// Find a permission by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Permission>>;

    /// Find a permission by its canonical name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Permission>>;

    /// List every permission.
    async fn list_all(&self) -> AppResult<Vec<Permission>>;

    /// Resolve a set of permission ids to entities. Unknown ids are
    /// silently omitted; a stale role reference degrades to a smaller
    /// (possibly empty) set rather than a fault.
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Permission>>;
}
