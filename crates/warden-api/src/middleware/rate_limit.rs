//! Cache-backed fixed-window rate limiting for credential endpoints.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use warden_cache::keys;
use warden_core::error::AppError;
use warden_core::traits::CacheProvider;

use crate::error::ApiError;
use crate::state::AppState;

/// Limits login attempts per client within a fixed window.
///
/// The counter lives in the shared cache, so the limit holds across
/// server instances. Degrades open: a cache failure lets the request
/// through rather than locking everyone out.
pub async fn login_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = client_key(&request);
    let window = Duration::from_secs(state.config.auth.login_rate_window_seconds);

    match state.cache.incr(&keys::login_rate(&client), window).await {
        Ok(count) if count > i64::from(state.config.auth.login_rate_limit) => {
            warn!(client = %client, count, "Login rate limit exceeded");
            return Err(AppError::rate_limited("Too many login attempts; try again later").into());
        }
        Ok(_) => {}
        Err(e) => {
            warn!(error = %e, "Rate limit counter unavailable; allowing request");
        }
    }

    Ok(next.run(request).await)
}

/// Client identity for rate limiting, taken from the forwarded address
/// when present.
fn client_key(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
