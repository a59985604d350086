//! Menu catalog: categories and menu items.

pub mod category;
pub mod menu_item;

pub use category::{CategoryRequest, CategoryService};
pub use menu_item::{MenuItemRequest, MenuItemService};
