//! Integration tests for orders and dashboard figures.

use http::StatusCode;
use uuid::Uuid;

use menuhub_database::OrderRepository as _;
use menuhub_entity::order::{NewOrder, NewOrderItem};
use menuhub_entity::user::UserRole;

use crate::helpers::TestApp;

async fn place_order(app: &TestApp, user_id: Uuid, quantity: i32, price: f64) -> Uuid {
    app.state
        .repositories
        .orders
        .create(&NewOrder {
            user_id,
            items: vec![NewOrderItem {
                menu_item_id: Uuid::new_v4(),
                quantity,
                price,
            }],
        })
        .await
        .expect("Failed to place order")
        .id
}

#[tokio::test]
async fn test_list_and_get_orders() {
    let app = TestApp::new();
    app.create_admin("pat").await;
    let customer = app.create_user("rex", &[], UserRole::User).await;
    let session = app.login("pat").await;
    let order_id = place_order(&app, customer, 2, 3.5).await;

    let listing = app
        .request("GET", "/admin/get-orders", None, Some(&session.access_token))
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    let orders = listing.body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["customerName"], "rex");
    assert_eq!(orders[0]["totalPrice"], 7.0);
    assert_eq!(orders[0]["status"], "pending");

    let single = app
        .request(
            "GET",
            &format!("/admin/orders/{order_id}"),
            None,
            Some(&session.access_token),
        )
        .await;
    assert_eq!(single.status, StatusCode::OK);
    assert_eq!(single.body["order"]["id"], order_id.to_string());
    assert_eq!(single.body["itemsOrder"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_update_order_status() {
    let app = TestApp::new();
    app.create_admin("sid").await;
    let session = app.login("sid").await;
    let order_id = place_order(&app, Uuid::new_v4(), 1, 9.0).await;

    let invalid = app
        .request(
            "PATCH",
            &format!("/admin/order-status/{order_id}"),
            Some(serde_json::json!({ "status": "teleported" })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.message(), "Invalid status value");

    let shipped = app
        .request(
            "PATCH",
            &format!("/admin/order-status/{order_id}"),
            Some(serde_json::json!({ "status": "shipped" })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(shipped.status, StatusCode::OK);
    assert_eq!(shipped.message(), "Status updated");
    assert_eq!(shipped.body["order"]["status"], "shipped");

    let unknown = app
        .request(
            "PATCH",
            &format!("/admin/order-status/{}", Uuid::new_v4()),
            Some(serde_json::json!({ "status": "delivered" })),
            Some(&session.access_token),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = TestApp::new();
    app.create_admin("tao").await;
    let customer = app.create_user("una", &[], UserRole::User).await;
    let session = app.login("tao").await;
    place_order(&app, customer, 2, 5.0).await;
    place_order(&app, customer, 1, 2.5).await;

    let response = app
        .request("GET", "/admin/stats", None, Some(&session.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalOrdersToday"], 2);
    assert_eq!(response.body["totalRevenue"], 12.5);
    assert_eq!(response.body["totalMenuItems"], 0);
    assert_eq!(response.body["totalCustomers"], 1);
}
