//! Route definitions for the Warden HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Builds the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes(&state))
        .merge(account_routes())
        .merge(access_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Session endpoints: register, login, refresh, logout.
///
/// Login carries the rate-limit layer; the other session endpoints are
/// not credential oracles and stay unthrottled.
fn auth_routes(state: &AppState) -> Router<AppState> {
    let login = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::login_rate_limit,
        ));

    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .merge(login)
}

/// Self-service endpoints: profile and password management.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handlers::account::get_profile))
        .route("/auth/me", put(handlers::account::update_profile))
        .route("/auth/me/password", put(handlers::account::change_password))
        .route(
            "/auth/password-reset/request",
            post(handlers::account::request_password_reset),
        )
        .route(
            "/auth/password-reset/confirm",
            post(handlers::account::confirm_password_reset),
        )
}

/// Administration endpoints: role assignment and catalog listing.
fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/role", put(handlers::access::assign_role))
        .route("/roles", get(handlers::access::list_roles))
        .route("/permissions", get(handlers::access::list_permissions))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use std::time::Duration;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors_config.max_age_seconds));

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
