//! PostgreSQL repository implementations.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod token;
pub mod user;

pub use category::PgCategoryRepository;
pub use menu_item::PgMenuItemRepository;
pub use order::PgOrderRepository;
pub use token::PgTokenRepository;
pub use user::PgUserRepository;
