//! Integration tests for the cookie-guarded admin pages.

use http::StatusCode;
use http::header::{CONTENT_TYPE, LOCATION};

use menuhub_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_page_without_cookie_redirects_to_login() {
    let app = TestApp::new();

    let response = app.page("/admin/dashboard", None).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.headers[LOCATION], "/admin/login");

    let garbage = app.page("/admin/orders", Some("forged")).await;
    assert_eq!(garbage.status, StatusCode::FOUND);
}

#[tokio::test]
async fn test_page_allowed_by_permission_list() {
    let app = TestApp::new();
    app.create_user("mia", &["/admin/orders"], UserRole::Admin)
        .await;
    let session = app.login("mia").await;

    let allowed = app.page("/admin/orders", Some(&session.refresh_token)).await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert!(
        allowed.headers[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let denied = app
        .page("/admin/users", Some(&session.refresh_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.text, "You do not have permission to access this page.");
}

#[tokio::test]
async fn test_empty_permissions_fall_back_to_dashboard() {
    let app = TestApp::new();
    app.create_user("ned", &[], UserRole::User).await;
    let session = app.login("ned").await;

    assert_eq!(
        app.page("/admin/dashboard", Some(&session.refresh_token))
            .await
            .status,
        StatusCode::OK
    );
    assert_eq!(
        app.page("/admin/categories", Some(&session.refresh_token))
            .await
            .status,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_login_permissions_match_page_guard() {
    let app = TestApp::new();
    app.create_user("nia", &[], UserRole::User).await;

    let login = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "nia@menuhub.test",
                "password": crate::helpers::PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::CREATED);
    assert_eq!(login.body["permissions"], serde_json::json!(["/admin/dashboard"]));

    let cookie = login.refresh_cookie().unwrap();
    for path in menuhub_entity::user::ADMIN_PAGES {
        let granted = login.body["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == path);
        let expected = if granted {
            StatusCode::OK
        } else {
            StatusCode::FORBIDDEN
        };
        assert_eq!(app.page(path, Some(&cookie)).await.status, expected, "{path}");
    }
}

#[tokio::test]
async fn test_page_rejects_rotated_cookie() {
    let app = TestApp::new();
    app.create_admin("ora").await;
    let session = app.login("ora").await;

    assert_eq!(
        app.refresh(Some(&session.refresh_token)).await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.page("/admin/menu-items", Some(&session.refresh_token))
            .await
            .status,
        StatusCode::FOUND
    );
}

#[tokio::test]
async fn test_login_page_and_health_are_public() {
    let app = TestApp::new();

    let login = app.page("/admin/login", None).await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(login.text.contains("<title>Login"));

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "connected");
}
