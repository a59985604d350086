//! Menu item repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use menuhub_core::error::{AppError, ErrorKind};
use menuhub_core::result::AppResult;
use menuhub_entity::category::CategorySummary;
use menuhub_entity::menu_item::{CreateMenuItem, MenuItem, MenuItemView, UpdateMenuItem};

use crate::traits::MenuItemRepository;

/// PostgreSQL-backed menu item repository.
#[derive(Debug, Clone)]
pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    /// Create a new menu item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MenuItemRow {
    #[sqlx(flatten)]
    item: MenuItem,
    category_name: Option<String>,
}

impl From<MenuItemRow> for MenuItemView {
    fn from(row: MenuItemRow) -> Self {
        let category = row.category_name.map(|name| CategorySummary {
            id: row.item.category_id,
            name,
        });
        Self {
            item: row.item,
            category,
        }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find menu item", e))
    }

    async fn find_all(&self) -> AppResult<Vec<MenuItemView>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            "SELECT m.*, c.name AS category_name FROM menu_items m \
             LEFT JOIN categories c ON c.id = m.category_id \
             ORDER BY m.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menu items", e))?;

        Ok(rows.into_iter().map(MenuItemView::from).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count menu items", e))
    }

    async fn create(&self, data: &CreateMenuItem) -> AppResult<MenuItem> {
        let now = Utc::now();
        sqlx::query_as::<_, MenuItem>(
            "INSERT INTO menu_items (id, name, description, price, category_id, image_url, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.category_id)
        .bind(&data.image_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu item", e))
    }

    async fn update(&self, id: Uuid, data: &UpdateMenuItem) -> AppResult<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>(
            "UPDATE menu_items SET name = COALESCE($2, name), \
             description = COALESCE($3, description), \
             price = COALESCE($4, price), \
             category_id = COALESCE($5, category_id), \
             image_url = COALESCE($6, image_url), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.category_id)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu item", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("DELETE FROM menu_items WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete menu item", e)
            })
    }
}
