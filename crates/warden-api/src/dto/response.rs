//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warden_auth::token::TokenPair;
use warden_entity::{Permission, Role, User};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Token pair response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Bearer token type marker.
    pub token_type: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
            access_expires_at: pair.access_expires_at,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}

/// User profile for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Whether the email is verified.
    pub is_verified: bool,
    /// Assigned role, if any.
    pub role_id: Option<Uuid>,
    /// Current permission snapshot.
    pub permissions: Vec<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            is_verified: user.is_verified,
            role_id: user.role_id,
            permissions: user.permissions,
            created_at: user.created_at,
        }
    }
}

/// Role summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Role ID.
    pub id: Uuid,
    /// Role name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Granted permission ids.
    pub permission_ids: Vec<Uuid>,
    /// Whether the role is built in.
    pub is_system: bool,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            permission_ids: role.permission_ids,
            is_system: role.is_system,
        }
    }
}

/// Permission summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionResponse {
    /// Permission ID.
    pub id: Uuid,
    /// Canonical `resource:action` name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Resource half.
    pub resource: String,
    /// Action half.
    pub action: String,
}

impl From<Permission> for PermissionResponse {
    fn from(perm: Permission) -> Self {
        Self {
            id: perm.id,
            name: perm.name,
            description: perm.description,
            resource: perm.resource,
            action: perm.action,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
