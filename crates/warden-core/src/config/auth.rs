//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days. Must exceed the access TTL.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// TTL for password-reset tokens in minutes.
    #[serde(default = "default_reset_ttl")]
    pub reset_token_ttl_minutes: u64,
    /// Maximum login attempts per window for the rate limiter.
    #[serde(default = "default_login_rate_limit")]
    pub login_rate_limit: u32,
    /// Window size for the login rate limiter in seconds.
    #[serde(default = "default_login_rate_window")]
    pub login_rate_window_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            password_min_length: default_password_min(),
            reset_token_ttl_minutes: default_reset_ttl(),
            login_rate_limit: default_login_rate_limit(),
            login_rate_window_seconds: default_login_rate_window(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}

fn default_reset_ttl() -> u64 {
    15
}

fn default_login_rate_limit() -> u32 {
    10
}

fn default_login_rate_window() -> u64 {
    60
}
