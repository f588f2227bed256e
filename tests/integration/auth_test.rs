//! Integration tests for the session lifecycle.

use http::StatusCode;

use crate::helpers::{TestApp, test_config};

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;
    app.register_user("alice@test.local", "longpass1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@test.local",
                "password": "longpass1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert!(data["access_token"].is_string());
    assert!(data["refresh_token"].is_string());
    assert_eq!(data["token_type"], "bearer");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new().await;
    app.register_user("bob@test.local", "longpass1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "BOB@test.local",
                "password": "longpass1",
                "full_name": "Bob Again",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_short_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "short@test.local",
                "password": "short",
                "full_name": "Shorty",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "WEAK_CREDENTIAL");
}

#[tokio::test]
async fn test_wrong_credentials_are_uniform() {
    let app = TestApp::new().await;
    app.register_user("carol@test.local", "longpass1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "carol@test.local",
                "password": "wrongpass1",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.local",
                "password": "longpass1",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    // Same code and same message either way.
    assert_eq!(wrong_password.body["error"], unknown_email.body["error"]);
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
}

#[tokio::test]
async fn test_refresh_rotates_and_consumes() {
    let app = TestApp::new().await;
    app.register_user("dave@test.local", "longpass1").await;
    let (_, refresh_token) = app.login("dave@test.local", "longpass1").await;

    let first = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Replaying the consumed token is rejected.
    let replay = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(replay.body["error"], "TOKEN_REVOKED");
}

#[tokio::test]
async fn test_logout_revokes_access_token() {
    let app = TestApp::new().await;
    app.register_user("erin@test.local", "longpass1").await;
    let (access_token, _) = app.login("erin@test.local", "longpass1").await;

    // Token works before logout.
    let before = app
        .request("GET", "/api/auth/me", None, Some(&access_token))
        .await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&access_token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let after = app
        .request("GET", "/api/auth/me", None, Some(&access_token))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
    assert_eq!(after.body["error"], "TOKEN_REVOKED");
}

#[tokio::test]
async fn test_refresh_token_cannot_authenticate() {
    let app = TestApp::new().await;
    app.register_user("frank@test.local", "longpass1").await;
    let (_, refresh_token) = app.login("frank@test.local", "longpass1").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&refresh_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_attempts_are_rate_limited() {
    let mut config = test_config();
    config.auth.login_rate_limit = 2;
    let app = TestApp::with_config(config).await;

    let attempt = serde_json::json!({
        "email": "anyone@test.local",
        "password": "whatever1",
    });
    for _ in 0..2 {
        let response = app
            .request("POST", "/api/auth/login", Some(attempt.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let throttled = app
        .request("POST", "/api/auth/login", Some(attempt), None)
        .await;
    assert_eq!(throttled.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(throttled.body["error"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
}
