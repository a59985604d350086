//! Admin page shells. The browser scripts behind them talk to the JSON API.

use axum::response::Html;

fn shell(title: &str, script: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | MenuHub Admin</title>\n</head>\n<body>\n\
         <main id=\"app\" data-page=\"{script}\"></main>\n\
         <script src=\"/js/{script}.js\"></script>\n</body>\n</html>\n"
    ))
}

/// GET /admin/login
pub async fn login_page() -> Html<String> {
    shell("Login", "login")
}

/// GET /admin/dashboard
pub async fn dashboard_page() -> Html<String> {
    shell("Dashboard", "dashboard")
}

/// GET /admin/categories
pub async fn categories_page() -> Html<String> {
    shell("Categories", "categories")
}

/// GET /admin/menu-items
pub async fn menu_items_page() -> Html<String> {
    shell("Menu items", "menu-items")
}

/// GET /admin/orders
pub async fn orders_page() -> Html<String> {
    shell("Orders", "orders")
}

/// GET /admin/users
pub async fn users_page() -> Html<String> {
    shell("Users", "users")
}
