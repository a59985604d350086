//! Route definitions for the MenuHub HTTP API.
//!
//! JSON endpoints and page shells live under `/admin`; the liveness check is
//! at `/health`. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(category_routes())
        .merge(menu_item_routes())
        .merge(order_routes())
        .merge(dashboard_routes())
        .merge(page_routes(state.clone()))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login, refresh, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/login",
            get(handlers::pages::login_page).post(handlers::auth::login),
        )
        .route("/admin/refresh-token", post(handlers::auth::refresh))
        .route("/admin/logout", post(handlers::auth::logout))
}

/// User administration
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/create-user", post(handlers::users::create_user))
        .route("/admin/update-user/{id}", patch(handlers::users::update_user))
        .route("/admin/delete-user/{id}", delete(handlers::users::delete_user))
        .route("/admin/get-users", get(handlers::users::list_users))
        .route("/admin/current-user", get(handlers::users::current_user))
}

/// Category CRUD
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/get-categories",
            get(handlers::categories::list_categories),
        )
        .route(
            "/admin/get-category/{id}",
            get(handlers::categories::get_category),
        )
        .route(
            "/admin/create-category",
            post(handlers::categories::create_category),
        )
        .route(
            "/admin/update-category/{id}",
            patch(handlers::categories::update_category),
        )
        .route(
            "/admin/delete-category/{id}",
            delete(handlers::categories::delete_category),
        )
}

/// Menu item CRUD
fn menu_item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/get-menu-items",
            get(handlers::menu_items::list_menu_items),
        )
        .route(
            "/admin/menu-items/create",
            post(handlers::menu_items::create_menu_item),
        )
        .route(
            "/admin/menu-items/update/{id}",
            patch(handlers::menu_items::update_menu_item),
        )
        .route(
            "/admin/delete-menu-item/{id}",
            delete(handlers::menu_items::delete_menu_item),
        )
}

/// Orders
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/get-orders", get(handlers::orders::list_orders))
        .route("/admin/orders/{id}", get(handlers::orders::get_order))
        .route(
            "/admin/order-status/{id}",
            patch(handlers::orders::update_order_status),
        )
}

/// Dashboard figures
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/admin/stats", get(handlers::dashboard::stats))
}

/// Page shells behind the cookie permission guard
fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(handlers::pages::dashboard_page))
        .route("/admin/categories", get(handlers::pages::categories_page))
        .route("/admin/menu-items", get(handlers::pages::menu_items_page))
        .route("/admin/orders", get(handlers::pages::orders_page))
        .route("/admin/users", get(handlers::pages::users_page))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::page::require_page_permission,
        ))
}
