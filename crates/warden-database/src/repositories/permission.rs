//! PostgreSQL permission store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use warden_core::error::{AppError, ErrorKind};
use warden_core::result::AppResult;
use warden_core::traits::PermissionStore;
use warden_entity::Permission;

use super::user::is_unique_violation;

/// Permission catalog persistence over PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgPermissionStore {
    pool: PgPool,
}

impl PgPermissionStore {
    /// Creates a new permission store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionStore for PgPermissionStore {
    async fn create(&self, permission: &Permission) -> AppResult<Permission> {
        sqlx::query_as::<_, Permission>(
            r#"
            INSERT INTO permissions
                (id, name, description, resource, action, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(permission.id)
        .bind(&permission.name)
        .bind(&permission.description)
        .bind(&permission.resource)
        .bind(&permission.action)
        .bind(permission.created_at)
        .bind(permission.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::already_exists("A permission with this name already exists")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create permission", e)
            }
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Permission>> {
        sqlx::query_as::<_, Permission>("SELECT * FROM permissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find permission by id", e)
            })
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Permission>> {
        sqlx::query_as::<_, Permission>("SELECT * FROM permissions WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find permission by name", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Permission>> {
        sqlx::query_as::<_, Permission>("SELECT * FROM permissions ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list permissions", e)
            })
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Permission>> {
        sqlx::query_as::<_, Permission>(
            "SELECT * FROM permissions WHERE id = ANY($1) ORDER BY name",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve permission ids", e)
        })
    }
}
