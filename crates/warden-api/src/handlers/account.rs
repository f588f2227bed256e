//! Self-service account handlers — profile, password change, reset.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use warden_core::error::AppError;
use warden_service::account::UpdateProfileRequest as ProfileChange;

use crate::dto::request::{
    ChangePasswordRequest, PasswordResetConfirm, PasswordResetRequest, UpdateProfileRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/auth/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.get_profile(auth.claims.sub).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/auth/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .account_service
        .update_profile(
            auth.claims.sub,
            ProfileChange {
                full_name: req.full_name,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/auth/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .account_service
        .change_password(auth.claims.sub, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed successfully".to_string(),
    })))
}

/// POST /api/auth/password-reset/request
///
/// The response never reveals whether the email is registered. The
/// issued token leaves the process through a delivery channel (email),
/// not through this endpoint.
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let _token = state
        .account_service
        .request_password_reset(&req.email)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "If the email is registered, a reset link has been sent".to_string(),
    })))
}

/// POST /api/auth/password-reset/confirm
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetConfirm>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .account_service
        .reset_password(&req.token, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password reset successfully".to_string(),
    })))
}
