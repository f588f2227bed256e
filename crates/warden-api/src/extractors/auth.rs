//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header and validates it end to end.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use warden_auth::token::Claims;
use warden_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller, available in handlers.
///
/// Extraction fails with 401 when the header is missing or malformed,
/// the token fails decode, a refresh token is presented, or the token
/// is revoked. Permission checks stay with the handlers; extraction
/// only establishes identity.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Validated claim set of the presented access token.
    pub claims: Claims,
    /// The raw bearer token, kept for flows that revoke it.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.guard.authenticate(token).await?;

        Ok(AuthUser {
            claims,
            token: token.to_string(),
        })
    }
}
