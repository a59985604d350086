//! Backend selection.

use std::sync::Arc;

use tracing::info;

use menuhub_core::config::{DatabaseBackend, DatabaseConfig};
use menuhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryDatabase;
use crate::repositories::{
    PgCategoryRepository, PgMenuItemRepository, PgOrderRepository, PgTokenRepository,
    PgUserRepository,
};
use crate::traits::{
    CategoryRepository, MenuItemRepository, OrderRepository, TokenRepository, UserRepository,
};

/// The full set of repositories for the configured backend.
#[derive(Debug, Clone)]
pub struct Repositories {
    /// Users.
    pub users: Arc<dyn UserRepository>,
    /// Refresh-token records.
    pub tokens: Arc<dyn TokenRepository>,
    /// Categories.
    pub categories: Arc<dyn CategoryRepository>,
    /// Menu items.
    pub menu_items: Arc<dyn MenuItemRepository>,
    /// Orders.
    pub orders: Arc<dyn OrderRepository>,
    /// Pool handle, present for the PostgreSQL backend.
    pub pool: Option<DatabasePool>,
}

impl Repositories {
    /// Build repositories for the configured backend.
    ///
    /// The PostgreSQL backend connects and runs pending migrations first.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let db = DatabasePool::connect(config).await?;
                db.migrate().await?;
                Ok(Self::postgres(db))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory storage backend; data is not persisted");
                Ok(Self::memory())
            }
        }
    }

    /// Repositories over an established PostgreSQL pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            tokens: Arc::new(PgTokenRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            menu_items: Arc::new(PgMenuItemRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool)),
            pool: Some(db),
        }
    }

    /// Fresh, empty in-memory repositories.
    pub fn memory() -> Self {
        let db = MemoryDatabase::new();
        Self {
            users: Arc::new(db.users()),
            tokens: Arc::new(db.tokens()),
            categories: Arc::new(db.categories()),
            menu_items: Arc::new(db.menu_items()),
            orders: Arc::new(db.orders()),
            pool: None,
        }
    }

    /// Check backend connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(db) => db.health_check().await,
            None => Ok(true),
        }
    }
}
