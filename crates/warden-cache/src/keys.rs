//! Cache key builders for all Warden cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key for a revoked token identifier.
pub fn revoked_token(jti: &str) -> String {
    format!("auth:revoked:{jti}")
}

/// Key for a pending password-reset token.
pub fn password_reset(token: &str) -> String {
    format!("auth:pwreset:{token}")
}

/// Key for the login rate-limit counter of a client.
pub fn login_rate(client: &str) -> String {
    format!("auth:ratelimit:login:{client}")
}
