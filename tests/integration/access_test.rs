//! Integration tests for role assignment and permission enforcement.

use http::StatusCode;
use warden_core::traits::RoleStore;

use crate::helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

#[tokio::test]
async fn test_admin_wildcard_grants_catalog_access() {
    let app = TestApp::new().await;
    let (access_token, _) = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let roles = app
        .request("GET", "/api/roles", None, Some(&access_token))
        .await;
    assert_eq!(roles.status, StatusCode::OK);
    let listed = roles.body["data"].as_array().unwrap();
    assert!(listed.iter().any(|r| r["name"] == "super_admin"));

    let permissions = app
        .request("GET", "/api/permissions", None, Some(&access_token))
        .await;
    assert_eq!(permissions.status, StatusCode::OK);
    assert!(!permissions.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_plain_user_is_forbidden() {
    let app = TestApp::new().await;
    app.register_user("kate@test.local", "longpass1").await;
    let (access_token, _) = app.login("kate@test.local", "longpass1").await;

    let response = app
        .request("GET", "/api/roles", None, Some(&access_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_role_assignment_updates_snapshot() {
    let app = TestApp::new().await;
    let user_id = app.register_user("leo@test.local", "longpass1").await;
    let (admin_token, _) = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let admin_role = app
        .roles
        .find_by_name("admin")
        .await
        .unwrap()
        .expect("seeded admin role");

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}/role"),
            Some(serde_json::json!({ "role_id": admin_role.id })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let snapshot = response.body["data"]["permissions"].as_array().unwrap();
    assert!(snapshot.iter().any(|p| p == "roles:list"));
}

#[tokio::test]
async fn test_assignment_requires_permission() {
    let app = TestApp::new().await;
    let target_id = app.register_user("mia@test.local", "longpass1").await;
    app.register_user("nate@test.local", "longpass1").await;
    let (plain_token, _) = app.login("nate@test.local", "longpass1").await;

    let admin_role = app
        .roles
        .find_by_name("admin")
        .await
        .unwrap()
        .expect("seeded admin role");

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}/role"),
            Some(serde_json::json!({ "role_id": admin_role.id })),
            Some(&plain_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_assignment_to_unknown_role_is_not_found() {
    let app = TestApp::new().await;
    let user_id = app.register_user("olga@test.local", "longpass1").await;
    let (admin_token, _) = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}/role"),
            Some(serde_json::json!({ "role_id": uuid::Uuid::new_v4() })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

/// Tokens issued before a role change keep the snapshot they were
/// minted with. Only a refresh picks up the new permissions.
#[tokio::test]
async fn test_old_token_keeps_stale_snapshot_until_refresh() {
    let app = TestApp::new().await;
    let user_id = app.register_user("pete@test.local", "longpass1").await;
    let (old_access, refresh_token) = app.login("pete@test.local", "longpass1").await;
    let (admin_token, _) = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let admin_role = app
        .roles
        .find_by_name("admin")
        .await
        .unwrap()
        .expect("seeded admin role");
    let assigned = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}/role"),
            Some(serde_json::json!({ "role_id": admin_role.id })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(assigned.status, StatusCode::OK);

    // The pre-assignment token still carries the old snapshot.
    let stale = app
        .request("GET", "/api/roles", None, Some(&old_access))
        .await;
    assert_eq!(stale.status, StatusCode::FORBIDDEN);

    // Refreshing re-reads the user and embeds the new snapshot.
    let refreshed = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    let new_access = refreshed.body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let fresh = app
        .request("GET", "/api/roles", None, Some(&new_access))
        .await;
    assert_eq!(fresh.status, StatusCode::OK);
}
