//! Dashboard headline figures.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;

use menuhub_core::result::AppResult;
use menuhub_database::{MenuItemRepository, OrderRepository, UserRepository};
use menuhub_entity::user::UserRole;

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Orders placed since midnight UTC.
    pub total_orders_today: i64,
    /// Sum of the totals of today's orders.
    pub total_revenue: f64,
    /// Menu items on offer.
    pub total_menu_items: i64,
    /// Users with the customer role.
    pub total_customers: i64,
}

/// Aggregates dashboard figures across repositories.
#[derive(Debug, Clone)]
pub struct DashboardService {
    orders: Arc<dyn OrderRepository>,
    menu_items: Arc<dyn MenuItemRepository>,
    users: Arc<dyn UserRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        menu_items: Arc<dyn MenuItemRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            orders,
            menu_items,
            users,
        }
    }

    /// Figures as of `now`.
    pub async fn stats_at(&self, now: DateTime<Utc>) -> AppResult<DashboardStats> {
        let start_of_day = now.date_naive().and_time(NaiveTime::MIN).and_utc();

        let (total_orders_today, total_revenue) = self.orders.totals_since(start_of_day).await?;
        let total_menu_items = self.menu_items.count().await?;
        let total_customers = self.users.count_by_role(UserRole::User).await?;

        Ok(DashboardStats {
            total_orders_today,
            total_revenue,
            total_menu_items,
            total_customers,
        })
    }
}
