//! Order entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::OrderStatus;

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier.
    pub id: Uuid,
    /// Customer who placed the order.
    pub user_id: Uuid,
    /// Order total.
    pub total_price: f64,
    /// Fulfilment status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A single line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning order.
    pub order_id: Uuid,
    /// Ordered menu item.
    pub menu_item_id: Uuid,
    /// Quantity ordered.
    pub quantity: i32,
    /// Unit price at order time.
    pub price: f64,
}

/// An order line with the menu item's current name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Line identifier.
    pub id: Uuid,
    /// Ordered menu item.
    pub menu_item_id: Uuid,
    /// Menu item name, absent when the item was deleted.
    pub menu_item_name: Option<String>,
    /// Quantity ordered.
    pub quantity: i32,
    /// Unit price at order time.
    pub price: f64,
}

/// An order with its customer name and lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    /// The order row.
    #[serde(flatten)]
    pub order: Order,
    /// Customer display name, absent when the user was deleted.
    pub customer_name: Option<String>,
    /// Order lines.
    pub items: Vec<OrderLine>,
}

/// Data required to record an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    /// Customer.
    pub user_id: Uuid,
    /// Lines to record.
    pub items: Vec<NewOrderItem>,
}

/// One line of a [`NewOrder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    /// Ordered menu item.
    pub menu_item_id: Uuid,
    /// Quantity ordered.
    pub quantity: i32,
    /// Unit price.
    pub price: f64,
}

impl NewOrder {
    /// Sum of quantity times unit price over all lines.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| f64::from(i.quantity) * i.price)
            .sum()
    }
}
