//! Warden server — authentication and access-control service.
//!
//! Main entry point that wires all crates together and starts the
//! server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use warden_auth::guard::AccessGuard;
use warden_auth::password::{Argon2Hasher, PasswordPolicy};
use warden_auth::token::TokenCodec;
use warden_cache::denylist::TokenDenylist;
use warden_cache::provider::CacheManager;
use warden_core::config::AppConfig;
use warden_core::error::AppError;
use warden_database::DatabasePool;
use warden_database::repositories::{PgPermissionStore, PgRoleStore, PgUserStore};
use warden_service::{AccessService, AccountService, AuthService, Seeder};

#[tokio::main]
async fn main() {
    let env = std::env::var("WARDEN_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Warden v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations.
    let db = DatabasePool::connect(&config.database).await?;
    warden_database::migration::run_migrations(db.pool()).await?;

    // Cache.
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // Auth machinery.
    let codec = TokenCodec::new(&config.auth);
    let policy = PasswordPolicy::new(&config.auth);
    let hasher = Arc::new(Argon2Hasher::new());
    let denylist = Arc::new(TokenDenylist::new(cache.clone()));
    let guard = Arc::new(AccessGuard::new(codec.clone(), denylist.clone()));

    // Stores.
    let users = Arc::new(PgUserStore::new(db.pool().clone()));
    let roles = Arc::new(PgRoleStore::new(db.pool().clone()));
    let permissions = Arc::new(PgPermissionStore::new(db.pool().clone()));

    // Seed the catalog, built-in roles, and initial admin.
    Seeder::new(
        users.clone(),
        roles.clone(),
        permissions.clone(),
        hasher.clone(),
    )
    .run(&config.seed)
    .await?;

    // Flows.
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        hasher.clone(),
        denylist.clone(),
        codec.clone(),
        policy.clone(),
    ));
    let account_service = Arc::new(AccountService::new(
        users.clone(),
        hasher.clone(),
        cache.clone(),
        policy,
        Duration::from_secs(config.auth.reset_token_ttl_minutes * 60),
    ));
    let access_service = Arc::new(AccessService::new(users, roles, permissions));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = warden_api::AppState {
        config: Arc::new(config),
        cache,
        guard,
        auth_service,
        account_service,
        access_service,
    };

    let app = warden_api::build_router(state);

    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))?;

    db.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolves when SIGINT (or SIGTERM on unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
