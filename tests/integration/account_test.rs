//! Integration tests for profile and password management.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_profile_read_requires_token() {
    let app = TestApp::new().await;
    app.register_user("grace@test.local", "longpass1").await;
    let (access_token, _) = app.login("grace@test.local", "longpass1").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "grace@test.local");
    // Credential material never appears in responses.
    assert!(response.body["data"].get("password_hash").is_none());

    let anonymous = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update() {
    let app = TestApp::new().await;
    app.register_user("henry@test.local", "longpass1").await;
    let (access_token, _) = app.login("henry@test.local", "longpass1").await;

    let response = app
        .request(
            "PUT",
            "/api/auth/me",
            Some(serde_json::json!({ "full_name": "  Henry Updated  " })),
            Some(&access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["full_name"], "Henry Updated");
}

#[tokio::test]
async fn test_change_password_requires_current() {
    let app = TestApp::new().await;
    app.register_user("iris@test.local", "longpass1").await;
    let (access_token, _) = app.login("iris@test.local", "longpass1").await;

    let wrong_current = app
        .request(
            "PUT",
            "/api/auth/me/password",
            Some(serde_json::json!({
                "current_password": "notmypass1",
                "new_password": "newlongpass1",
            })),
            Some(&access_token),
        )
        .await;
    assert_eq!(wrong_current.status, StatusCode::UNAUTHORIZED);

    let changed = app
        .request(
            "PUT",
            "/api/auth/me/password",
            Some(serde_json::json!({
                "current_password": "longpass1",
                "new_password": "newlongpass1",
            })),
            Some(&access_token),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK);

    // Old password no longer works, the new one does.
    let old_login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "iris@test.local",
                "password": "longpass1",
            })),
            None,
        )
        .await;
    assert_eq!(old_login.status, StatusCode::UNAUTHORIZED);
    app.login("iris@test.local", "newlongpass1").await;
}

#[tokio::test]
async fn test_password_reset_request_is_generic() {
    let app = TestApp::new().await;
    app.register_user("judy@test.local", "longpass1").await;

    let known = app
        .request(
            "POST",
            "/api/auth/password-reset/request",
            Some(serde_json::json!({ "email": "judy@test.local" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/password-reset/request",
            Some(serde_json::json!({ "email": "ghost@test.local" })),
            None,
        )
        .await;

    // Identical response whether or not the address is registered.
    assert_eq!(known.status, StatusCode::OK);
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(known.body, unknown.body);
}

#[tokio::test]
async fn test_password_reset_confirm_rejects_bad_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/password-reset/confirm",
            Some(serde_json::json!({
                "token": "no-such-token",
                "new_password": "newlongpass1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_TOKEN");
}
