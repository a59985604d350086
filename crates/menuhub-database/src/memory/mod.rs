//! In-memory repository implementations.
//!
//! Every table lives behind a lock inside a shared [`MemoryDatabase`], so the
//! repositories handed out by one database see each other's writes the way
//! tables in one PostgreSQL schema do. Nothing survives a restart.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod token;
pub mod user;

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use menuhub_entity::category::Category;
use menuhub_entity::menu_item::MenuItem;
use menuhub_entity::order::{Order, OrderItem};
use menuhub_entity::token::TokenRecord;
use menuhub_entity::user::User;

pub use category::MemoryCategoryRepository;
pub use menu_item::MemoryMenuItemRepository;
pub use order::MemoryOrderRepository;
pub use token::MemoryTokenRepository;
pub use user::MemoryUserRepository;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: RwLock<HashMap<Uuid, User>>,
    /// Keyed by owning user id.
    pub(crate) tokens: DashMap<Uuid, TokenRecord>,
    pub(crate) categories: RwLock<HashMap<Uuid, Category>>,
    pub(crate) menu_items: RwLock<HashMap<Uuid, MenuItem>>,
    pub(crate) orders: RwLock<HashMap<Uuid, Order>>,
    pub(crate) order_items: RwLock<Vec<OrderItem>>,
}

/// Process-local storage shared by the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Tables>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// User repository over this database.
    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository::new(Arc::clone(&self.tables))
    }

    /// Token repository over this database.
    pub fn tokens(&self) -> MemoryTokenRepository {
        MemoryTokenRepository::new(Arc::clone(&self.tables))
    }

    /// Category repository over this database.
    pub fn categories(&self) -> MemoryCategoryRepository {
        MemoryCategoryRepository::new(Arc::clone(&self.tables))
    }

    /// Menu item repository over this database.
    pub fn menu_items(&self) -> MemoryMenuItemRepository {
        MemoryMenuItemRepository::new(Arc::clone(&self.tables))
    }

    /// Order repository over this database.
    pub fn orders(&self) -> MemoryOrderRepository {
        MemoryOrderRepository::new(Arc::clone(&self.tables))
    }
}
