//! Integration tests for user administration.

use http::StatusCode;

use menuhub_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_user_and_list() {
    let app = TestApp::new();
    app.create_admin("ada").await;
    let session = app.login("ada").await;

    let response = app
        .request(
            "POST",
            "/admin/create-user",
            Some(serde_json::json!({
                "name": "Bruno",
                "email": "Bruno@MenuHub.test",
                "password": "kitchen-pass",
                "role": "admin",
            })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "User created successfully");
    assert!(response.body["userId"].is_string());

    let listing = app
        .request("GET", "/admin/get-users", None, Some(&session.access_token))
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    let users = listing.body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    let bruno = users.iter().find(|u| u["name"] == "Bruno").unwrap();
    assert_eq!(bruno["email"], "bruno@menuhub.test");
    assert_eq!(bruno["permissions"], serde_json::json!(["/admin/dashboard"]));
    assert_eq!(bruno["isVerified"], true);
    assert!(bruno.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::new();
    app.create_admin("cleo").await;
    let session = app.login("cleo").await;

    let response = app
        .request(
            "POST",
            "/admin/create-user",
            Some(serde_json::json!({
                "name": "Someone else",
                "email": "CLEO@menuhub.test",
                "password": "kitchen-pass",
            })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "This email is already in use, Please choose a different one"
    );
}

#[tokio::test]
async fn test_create_user_validation() {
    let app = TestApp::new();
    app.create_admin("dina").await;
    let session = app.login("dina").await;

    let missing = app
        .request(
            "POST",
            "/admin/create-user",
            Some(serde_json::json!({ "name": "Eli" })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.message(), "Name, email and password are required");

    let short = app
        .request(
            "POST",
            "/admin/create-user",
            Some(serde_json::json!({
                "name": "Eli",
                "email": "eli@menuhub.test",
                "password": "short",
            })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
    assert_eq!(short.message(), "Minimum password length is 8 characters");
}

#[tokio::test]
async fn test_cannot_modify_or_delete_self() {
    let app = TestApp::new();
    let id = app.create_admin("fay").await;
    let session = app.login("fay").await;

    let update = app
        .request(
            "PATCH",
            &format!("/admin/update-user/{id}"),
            Some(serde_json::json!({ "name": "Fay", "email": "fay@menuhub.test" })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);
    assert_eq!(update.message(), "You cannot modify your own account");

    let delete = app
        .request(
            "DELETE",
            &format!("/admin/delete-user/{id}"),
            None,
            Some(&session.access_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
    assert_eq!(delete.message(), "You cannot delete your own account");
}

#[tokio::test]
async fn test_update_other_user() {
    let app = TestApp::new();
    app.create_admin("gil").await;
    let target = app.create_user("hal", &[], UserRole::User).await;
    let session = app.login("gil").await;

    let response = app
        .request(
            "PATCH",
            &format!("/admin/update-user/{target}"),
            Some(serde_json::json!({
                "name": "Hal",
                "email": "hal@menuhub.test",
                "permissions": ["/admin/orders"],
            })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User updated successfully");

    let unknown = app
        .request(
            "PATCH",
            &format!("/admin/update-user/{}", uuid::Uuid::new_v4()),
            Some(serde_json::json!({ "name": "X", "email": "x@menuhub.test" })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.message(), "User not found");
}

#[tokio::test]
async fn test_delete_user_revokes_their_session() {
    let app = TestApp::new();
    app.create_admin("ivy").await;
    let target = app.create_admin("jon").await;
    let admin = app.login("ivy").await;
    let victim = app.login("jon").await;

    let response = app
        .request(
            "DELETE",
            &format!("/admin/delete-user/{target}"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User deleted successfully");

    assert_eq!(
        app.refresh(Some(&victim.refresh_token)).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.page("/admin/dashboard", Some(&victim.refresh_token))
            .await
            .status,
        StatusCode::FOUND
    );
}

#[tokio::test]
async fn test_current_user() {
    let app = TestApp::new();
    let id = app.create_admin("kai").await;
    let session = app.login("kai").await;

    let response = app
        .request(
            "GET",
            "/admin/current-user",
            None,
            Some(&session.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], id.to_string());
    assert_eq!(response.body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_invalid_id_segment() {
    let app = TestApp::new();
    app.create_admin("lou").await;
    let session = app.login("lou").await;

    let response = app
        .request(
            "DELETE",
            "/admin/delete-user/42",
            None,
            Some(&session.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
