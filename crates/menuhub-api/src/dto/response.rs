//! Response DTOs.

use serde::Serialize;
use uuid::Uuid;

use menuhub_entity::menu_item::{MenuItem, MenuItemView};
use menuhub_entity::order::{Order, OrderDetails, OrderLine};
use menuhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Success flag with a message.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessMessage {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Message.
    pub message: String,
    /// Short-lived access token.
    pub access_token: String,
    /// Page paths the user may open.
    pub permissions: Vec<String>,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// New access token.
    pub access_token: String,
}

/// User creation response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedResponse {
    /// Message.
    pub message: String,
    /// Id of the new user.
    pub user_id: Uuid,
}

/// User listing.
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    /// All users.
    pub users: Vec<User>,
}

/// Single user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// The user.
    pub user: User,
}

/// Menu item listing.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemsResponse {
    /// Message.
    pub message: String,
    /// Items with their category.
    pub data: Vec<MenuItemView>,
}

/// Single menu item after a write.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    /// Message.
    pub message: String,
    /// The item.
    pub item: MenuItem,
}

/// Order listing.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    /// Message.
    pub message: String,
    /// Orders with customer and lines.
    pub orders: Vec<OrderDetails>,
}

/// Single order with its lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// The order row.
    pub order: Order,
    /// Customer display name, absent when the user was deleted.
    pub customer_name: Option<String>,
    /// The order lines.
    pub items_order: Vec<OrderLine>,
}

impl From<OrderDetails> for OrderResponse {
    fn from(details: OrderDetails) -> Self {
        Self {
            order: details.order,
            customer_name: details.customer_name,
            items_order: details.items,
        }
    }
}

/// Order after a status change.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusResponse {
    /// Message.
    pub message: String,
    /// The order.
    pub order: Order,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub database: String,
}
