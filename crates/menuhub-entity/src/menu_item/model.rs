//! Menu item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::category::CategorySummary;

/// Maximum length of a menu item name, in characters.
pub const MENU_ITEM_NAME_MAX: usize = 50;

/// A dish offered on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier.
    pub id: Uuid,
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Unit price. Never negative.
    pub price: f64,
    /// Owning category.
    pub category_id: Uuid,
    /// Publicly reachable image URL.
    pub image_url: String,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A menu item with its category resolved, as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemView {
    /// The item itself.
    #[serde(flatten)]
    pub item: MenuItem,
    /// The owning category, if it still exists.
    pub category: Option<CategorySummary>,
}

/// Data required to create a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuItem {
    /// Trimmed name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Owning category.
    pub category_id: Uuid,
    /// Image URL.
    pub image_url: String,
}

/// Partial menu item update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMenuItem {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New category.
    pub category_id: Option<Uuid>,
    /// New image URL.
    pub image_url: Option<String>,
}
