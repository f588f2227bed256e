//! Role persistence port.

use async_trait::async_trait;
use uuid::Uuid;

use warden_entity::Role;

use crate::result::AppResult;

/// Persistent storage of roles.
///
/// "Not found" is an expected negative-path signal here, never an error:
/// `find_by_*` returning `None` is interpreted by flows per context.
#[async_trait]
pub trait RoleStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new role and return the stored entity.
    async fn create(&self, role: &Role) -> AppResult<Role>;

    /// Find a role by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;

    /// Find a role by its normalized name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// List every role.
    async fn list_all(&self) -> AppResult<Vec<Role>>;
}
