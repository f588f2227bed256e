//! Administration handlers — role assignment and catalog listing.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use warden_auth::rbac::catalog::{PERMISSIONS_LIST, ROLES_LIST, USERS_UPDATE};

use crate::dto::request::AssignRoleRequest;
use crate::dto::response::{ApiResponse, PermissionResponse, RoleResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/users/{id}/role
pub async fn assign_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<AssignRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    state.guard.authorize_all(&auth.claims, &[USERS_UPDATE])?;

    let user = state
        .access_service
        .assign_role(user_id, req.role_id)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/roles
pub async fn list_roles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<RoleResponse>>>, ApiError> {
    state.guard.authorize_all(&auth.claims, &[ROLES_LIST])?;

    let roles = state.access_service.list_roles().await?;
    Ok(Json(ApiResponse::ok(
        roles.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/permissions
pub async fn list_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<PermissionResponse>>>, ApiError> {
    state.guard.authorize_all(&auth.claims, &[PERMISSIONS_LIST])?;

    let permissions = state.access_service.list_permissions().await?;
    Ok(Json(ApiResponse::ok(
        permissions.into_iter().map(Into::into).collect(),
    )))
}
