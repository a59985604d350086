//! Menu item entities.

pub mod model;

pub use model::{CreateMenuItem, MENU_ITEM_NAME_MAX, MenuItem, MenuItemView, UpdateMenuItem};
