//! Integration tests for the login, refresh, and logout flow.

use chrono::{Duration, Utc};
use http::StatusCode;

use menuhub_auth::jwt::JwtEncoder;
use menuhub_entity::user::UserRole;

use crate::helpers::{PASSWORD, TestApp};

const EXPIRED_MESSAGE: &str = "Refresh token is invalid or expired. Please log in again.";

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.create_user("olga", &["/admin/orders"], UserRole::Admin)
        .await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "OLGA@menuhub.test",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "Successful login");
    assert!(response.body["accessToken"].is_string());
    assert_eq!(response.body["permissions"], serde_json::json!(["/admin/orders"]));
    assert!(response.body.get("refreshToken").is_none());

    let cookie = response.refresh_cookie_header().unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=2592000"));
}

#[tokio::test]
async fn test_login_defaults_permissions_to_dashboard() {
    let app = TestApp::new();
    app.create_user("pia", &[], UserRole::User).await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "pia@menuhub.test",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body["permissions"],
        serde_json::json!(["/admin/dashboard"])
    );
}

#[tokio::test]
async fn test_login_failures_do_not_reveal_accounts() {
    let app = TestApp::new();
    app.create_admin("quinn").await;

    let wrong_password = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "quinn@menuhub.test",
                "password": "not-the-password",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "nobody@menuhub.test",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.message(), "Invalid email or password");
    assert!(wrong_password.refresh_cookie().is_none());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({ "email": "rae@menuhub.test" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Please enter your email and password");
}

#[tokio::test]
async fn test_refresh_rotates_token() {
    let app = TestApp::new();
    app.create_admin("sam").await;
    let session = app.login("sam").await;

    let response = app.refresh(Some(&session.refresh_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["accessToken"].is_string());
    assert_eq!(response.body.as_object().map(|o| o.len()), Some(1));

    let cookie = response.refresh_cookie_header().unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Max-Age"));
    let rotated = response.refresh_cookie().unwrap();
    assert_ne!(rotated, session.refresh_token);

    let replay = app.refresh(Some(&session.refresh_token)).await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(replay.message(), EXPIRED_MESSAGE);

    let next = app.refresh(Some(&rotated)).await;
    assert_eq!(next.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::new();

    let response = app.refresh(None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), EXPIRED_MESSAGE);

    let garbage = app.refresh(Some("not-a-token")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_second_login_invalidates_first_refresh_token() {
    let app = TestApp::new();
    app.create_admin("tess").await;

    let first = app.login("tess").await;
    let second = app.login("tess").await;

    assert_eq!(
        app.refresh(Some(&first.refresh_token)).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.refresh(Some(&second.refresh_token)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_concurrent_refresh_has_one_winner() {
    let app = TestApp::new();
    app.create_admin("uma").await;
    let session = app.login("uma").await;

    let (a, b) = tokio::join!(
        app.refresh(Some(&session.refresh_token)),
        app.refresh(Some(&session.refresh_token)),
    );

    let winners = [a.status, b.status]
        .iter()
        .filter(|s| **s == StatusCode::OK)
        .count();
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_logout_revokes_session_and_clears_cookie() {
    let app = TestApp::new();
    app.create_admin("vic").await;
    let session = app.login("vic").await;

    let response = app
        .request("POST", "/admin/logout", None, Some(&session.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Logged out successfully");
    assert_eq!(response.refresh_cookie().as_deref(), Some(""));
    assert!(
        response
            .refresh_cookie_header()
            .unwrap()
            .contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT")
    );

    assert_eq!(
        app.refresh(Some(&session.refresh_token)).await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_logout_requires_bearer_token() {
    let app = TestApp::new();

    let response = app.request("POST", "/admin/logout", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    let app = TestApp::new();
    let user_id = app.create_admin("wes").await;

    let encoder = JwtEncoder::new(&app.state.config.auth);
    let stale = encoder
        .issue_at(user_id, Utc::now() - Duration::minutes(10))
        .unwrap();

    let response = app
        .request("GET", "/admin/current-user", None, Some(&stale.access_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let app = TestApp::new();
    app.create_admin("xena").await;
    let session = app.login("xena").await;

    let response = app
        .request(
            "GET",
            "/admin/current-user",
            None,
            Some(&session.refresh_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
