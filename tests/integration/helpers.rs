//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use warden_auth::guard::AccessGuard;
use warden_auth::password::{Argon2Hasher, PasswordPolicy};
use warden_auth::token::TokenCodec;
use warden_cache::denylist::TokenDenylist;
use warden_cache::memory::MemoryCacheProvider;
use warden_cache::provider::CacheManager;
use warden_core::config::{AppConfig, SeedConfig};
use warden_database::memory::{InMemoryPermissionStore, InMemoryRoleStore, InMemoryUserStore};
use warden_service::{AccessService, AccountService, AuthService, Seeder};

/// Email and password of the seeded super-admin account.
pub const ADMIN_EMAIL: &str = "root@test.local";
pub const ADMIN_PASSWORD: &str = "rootpassword1";

/// Test application running the full router on in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Direct handle on the user store for fixture surgery.
    pub users: Arc<InMemoryUserStore>,
    /// Direct handle on the role store.
    pub roles: Arc<InMemoryRoleStore>,
}

impl TestApp {
    /// Builds a fully wired application with seeded catalog, built-in
    /// roles, and a super-admin account.
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Builds the application with a caller-supplied configuration.
    pub async fn with_config(config: AppConfig) -> Self {
        let config = AppConfig {
            seed: SeedConfig {
                enabled: true,
                admin_email: ADMIN_EMAIL.to_string(),
                admin_password: ADMIN_PASSWORD.to_string(),
            },
            ..config
        };

        let users = Arc::new(InMemoryUserStore::new());
        let roles = Arc::new(InMemoryRoleStore::new());
        let permissions = Arc::new(InMemoryPermissionStore::new());
        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&config.cache.memory),
        )));
        let hasher = Arc::new(Argon2Hasher::new());
        let codec = TokenCodec::new(&config.auth);
        let policy = PasswordPolicy::new(&config.auth);
        let denylist = Arc::new(TokenDenylist::new(cache.clone()));
        let guard = Arc::new(AccessGuard::new(codec.clone(), denylist.clone()));

        Seeder::new(
            users.clone(),
            roles.clone(),
            permissions.clone(),
            hasher.clone(),
        )
        .run(&config.seed)
        .await
        .expect("Seeding failed");

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            hasher.clone(),
            denylist,
            codec,
            policy.clone(),
        ));
        let account_service = Arc::new(AccountService::new(
            users.clone(),
            hasher,
            cache.clone(),
            policy,
            Duration::from_secs(900),
        ));
        let access_service = Arc::new(AccessService::new(
            users.clone(),
            roles.clone(),
            permissions,
        ));

        let state = warden_api::AppState {
            config: Arc::new(config),
            cache,
            guard,
            auth_service,
            account_service,
            access_service,
        };

        Self {
            router: warden_api::build_router(state),
            users,
            roles,
        }
    }

    /// Registers a user through the API and returns their id.
    pub async fn register_user(&self, email: &str, password: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                    "full_name": "Test User",
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No user id in registration response")
    }

    /// Logs in and returns the (access, refresh) token pair.
    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        let data = &response.body["data"];
        (
            data["access_token"].as_str().unwrap().to_string(),
            data["refresh_token"].as_str().unwrap().to_string(),
        )
    }

    /// Makes an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

/// Default test configuration: real auth settings with a limiter high
/// enough that ordinary test traffic never trips it.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.login_rate_limit = 100;
    config
}
