//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use warden_auth::guard::AccessGuard;
use warden_cache::provider::CacheManager;
use warden_core::config::AppConfig;
use warden_service::{AccessService, AccountService, AuthService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Token authentication and permission enforcement.
    pub guard: Arc<AccessGuard>,
    /// Session lifecycle flows.
    pub auth_service: Arc<AuthService>,
    /// Self-service account flows.
    pub account_service: Arc<AccountService>,
    /// Role assignment and catalog flows.
    pub access_service: Arc<AccessService>,
}
