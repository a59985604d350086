//! Repository traits shared by the PostgreSQL and in-memory backends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use menuhub_core::result::AppResult;
use menuhub_entity::category::{Category, CreateCategory, UpdateCategory};
use menuhub_entity::menu_item::{CreateMenuItem, MenuItem, MenuItemView, UpdateMenuItem};
use menuhub_entity::order::{NewOrder, Order, OrderDetails, OrderStatus};
use menuhub_entity::token::TokenRecord;
use menuhub_entity::user::{CreateUser, UpdateUser, User, UserRole};

/// User persistence.
///
/// Unique-field collisions surface as `AppError::conflict("name" | "email")`.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, newest first.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Count all users.
    async fn count(&self) -> AppResult<i64>;

    /// Count users holding `role`.
    async fn count_by_role(&self, role: UserRole) -> AppResult<i64>;

    /// Create a new user.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Update a user. Returns `None` if the id is unknown.
    async fn update(&self, data: &UpdateUser) -> AppResult<Option<User>>;

    /// Delete a user. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Refresh-token record persistence. At most one record exists per user.
#[async_trait]
pub trait TokenRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find the record owned by `user_id`.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<TokenRecord>>;

    /// Find the record whose current refresh token equals `token`.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<TokenRecord>>;

    /// Atomically drop any record of `user_id` and store a new one.
    async fn replace_for_user(&self, user_id: Uuid, token: &str) -> AppResult<TokenRecord>;

    /// Overwrite the refresh token only if it still equals `current`.
    ///
    /// Returns `None` when the record is gone or was rotated by someone else.
    async fn rotate(
        &self,
        user_id: Uuid,
        current: &str,
        next: &str,
    ) -> AppResult<Option<TokenRecord>>;

    /// Delete every record of `user_id`. Returns the number removed.
    async fn delete_for_user(&self, user_id: Uuid) -> AppResult<u64>;
}

/// Category persistence.
#[async_trait]
pub trait CategoryRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a category by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// List all categories, newest first.
    async fn find_all(&self) -> AppResult<Vec<Category>>;

    /// Create a category with an item count of zero.
    async fn create(&self, data: &CreateCategory) -> AppResult<Category>;

    /// Apply a partial update. Returns `None` if the id is unknown.
    async fn update(&self, id: Uuid, data: &UpdateCategory) -> AppResult<Option<Category>>;

    /// Delete a category. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Add `delta` to the item count, clamping at zero.
    async fn adjust_item_count(&self, id: Uuid, delta: i32) -> AppResult<()>;
}

/// Menu item persistence.
#[async_trait]
pub trait MenuItemRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a menu item by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MenuItem>>;

    /// List all menu items with their category, newest first.
    async fn find_all(&self) -> AppResult<Vec<MenuItemView>>;

    /// Count all menu items.
    async fn count(&self) -> AppResult<i64>;

    /// Create a menu item.
    async fn create(&self, data: &CreateMenuItem) -> AppResult<MenuItem>;

    /// Apply a partial update. Returns `None` if the id is unknown.
    async fn update(&self, id: Uuid, data: &UpdateMenuItem) -> AppResult<Option<MenuItem>>;

    /// Delete a menu item, returning the removed row.
    async fn delete(&self, id: Uuid) -> AppResult<Option<MenuItem>>;
}

/// Order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync + std::fmt::Debug + 'static {
    /// List all orders with customer name and lines, newest first.
    async fn find_all(&self) -> AppResult<Vec<OrderDetails>>;

    /// Find one order with its lines.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<OrderDetails>>;

    /// Record an order and its lines with status `pending`.
    ///
    /// Orders are placed by the storefront. The back office exposes no route
    /// for this; it is the seeding entry point for fixtures and data loads.
    async fn create(&self, data: &NewOrder) -> AppResult<Order>;

    /// Set the status of an order. Returns `None` if the id is unknown.
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> AppResult<Option<Order>>;

    /// Number of orders placed at or after `since` and the sum of their totals.
    async fn totals_since(&self, since: DateTime<Utc>) -> AppResult<(i64, f64)>;
}
