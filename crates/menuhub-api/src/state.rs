//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use menuhub_auth::guard::{AccessGuard, PageGuard};
use menuhub_auth::session::SessionManager;
use menuhub_core::config::AppConfig;
use menuhub_database::Repositories;
use menuhub_service::{
    AdminUserService, CategoryService, DashboardService, MenuItemService, OrderService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Repositories for the configured backend
    pub repositories: Repositories,

    // ── Auth ─────────────────────────────────────────────────
    /// Login, refresh, and logout
    pub session_manager: Arc<SessionManager>,
    /// Bearer-token guard for API routes
    pub access_guard: Arc<AccessGuard>,
    /// Cookie guard for admin pages
    pub page_guard: Arc<PageGuard>,

    // ── Services ─────────────────────────────────────────────
    /// User administration
    pub user_service: Arc<AdminUserService>,
    /// Categories
    pub category_service: Arc<CategoryService>,
    /// Menu items
    pub menu_item_service: Arc<MenuItemService>,
    /// Orders
    pub order_service: Arc<OrderService>,
    /// Dashboard figures
    pub dashboard_service: Arc<DashboardService>,
}
