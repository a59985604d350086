//! Integration tests for categories and menu items.

use http::StatusCode;

use crate::helpers::{Session, TestApp};

async fn admin_session(app: &TestApp) -> Session {
    app.create_admin("chef").await;
    app.login("chef").await
}

async fn create_category(app: &TestApp, token: &str, name: &str) -> String {
    let response = app
        .request(
            "POST",
            "/admin/create-category",
            Some(serde_json::json!({ "name": name, "description": "Fresh daily" })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    response.body["data"]["id"].as_str().unwrap().to_string()
}

async fn item_count(app: &TestApp, token: &str, id: &str) -> i64 {
    let response = app
        .request("GET", &format!("/admin/get-category/{id}"), None, Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["data"]["itemCount"].as_i64().unwrap()
}

#[tokio::test]
async fn test_catalog_requires_bearer_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/admin/get-categories", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_menu_items_keep_category_count_in_step() {
    let app = TestApp::new();
    let session = admin_session(&app).await;
    let token = session.access_token.as_str();
    let category = create_category(&app, token, "Pasta").await;

    let created = app
        .request(
            "POST",
            "/admin/menu-items/create",
            Some(serde_json::json!({
                "name": "Carbonara",
                "description": "Egg, pecorino, guanciale",
                "price": 12.5,
                "categoryId": category,
                "imageUrl": "https://img.menuhub.test/carbonara.jpg",
            })),
            Some(token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.message(), "Menu item created successfully");
    let item_id = created.body["item"]["id"].as_str().unwrap().to_string();
    assert_eq!(item_count(&app, token, &category).await, 1);

    let listing = app
        .request("GET", "/admin/get-menu-items", None, Some(token))
        .await;
    assert_eq!(listing.body["data"][0]["category"]["name"], "Pasta");

    let blocked = app
        .request(
            "DELETE",
            &format!("/admin/delete-category/{category}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        blocked.message(),
        "Cannot delete category with existing items"
    );

    let deleted = app
        .request(
            "DELETE",
            &format!("/admin/delete-menu-item/{item_id}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(item_count(&app, token, &category).await, 0);

    let removed = app
        .request(
            "DELETE",
            &format!("/admin/delete-category/{category}"),
            None,
            Some(token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body["success"], true);
}

#[tokio::test]
async fn test_menu_item_validation() {
    let app = TestApp::new();
    let session = admin_session(&app).await;
    let token = session.access_token.as_str();

    let missing = app
        .request(
            "POST",
            "/admin/menu-items/create",
            Some(serde_json::json!({ "name": "Soup" })),
            Some(token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.message(), "All fields are required");

    let unknown_category = app
        .request(
            "POST",
            "/admin/menu-items/create",
            Some(serde_json::json!({
                "name": "Soup",
                "description": "Hot",
                "price": 4.0,
                "categoryId": uuid::Uuid::new_v4(),
                "imageUrl": "https://img.menuhub.test/soup.jpg",
            })),
            Some(token),
        )
        .await;
    assert_eq!(unknown_category.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_category.message(), "Invalid category ID");

    let malformed_category = app
        .request(
            "POST",
            "/admin/menu-items/create",
            Some(serde_json::json!({
                "name": "Soup",
                "description": "Hot",
                "price": 4.0,
                "category": "soups",
                "imageUrl": "https://img.menuhub.test/soup.jpg",
            })),
            Some(token),
        )
        .await;
    assert_eq!(malformed_category.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed_category.message(), "Invalid category ID");
}

#[tokio::test]
async fn test_category_update_and_missing_category() {
    let app = TestApp::new();
    let session = admin_session(&app).await;
    let token = session.access_token.as_str();
    let category = create_category(&app, token, "Drinks").await;

    let updated = app
        .request(
            "PATCH",
            &format!("/admin/update-category/{category}"),
            Some(serde_json::json!({ "name": "Beverages" })),
            Some(token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "Beverages");
    assert_eq!(updated.body["data"]["description"], "Fresh daily");

    let missing = app
        .request(
            "GET",
            &format!("/admin/get-category/{}", uuid::Uuid::new_v4()),
            None,
            Some(token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "Category not found");
}
