//! Order repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use menuhub_core::error::{AppError, ErrorKind};
use menuhub_core::result::AppResult;
use menuhub_entity::order::{NewOrder, Order, OrderDetails, OrderLine, OrderStatus};

use crate::traits::OrderRepository;

/// PostgreSQL-backed order repository.
#[derive(Debug, Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the lines of the given orders, keyed by order id.
    async fn lines_for(&self, order_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<OrderLine>>> {
        let rows = sqlx::query_as::<_, LineRow>(
            "SELECT oi.order_id, oi.id, oi.menu_item_id, m.name AS menu_item_name, \
             oi.quantity, oi.price \
             FROM order_items oi LEFT JOIN menu_items m ON m.id = oi.menu_item_id \
             WHERE oi.order_id = ANY($1)",
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load order items", e))?;

        let mut grouped: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
        for row in rows {
            grouped.entry(row.order_id).or_default().push(row.line);
        }
        Ok(grouped)
    }
}

#[derive(FromRow)]
struct OrderRow {
    #[sqlx(flatten)]
    order: Order,
    customer_name: Option<String>,
}

#[derive(FromRow)]
struct LineRow {
    order_id: Uuid,
    #[sqlx(flatten)]
    line: OrderLine,
}

const ORDER_SELECT: &str = "SELECT o.*, u.name AS customer_name FROM orders o \
                            LEFT JOIN users u ON u.id = o.user_id";

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_all(&self) -> AppResult<Vec<OrderDetails>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{ORDER_SELECT} ORDER BY o.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.order.id).collect();
        let mut lines = self.lines_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| OrderDetails {
                items: lines.remove(&row.order.id).unwrap_or_default(),
                order: row.order,
                customer_name: row.customer_name,
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<OrderDetails>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{ORDER_SELECT} WHERE o.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut lines = self.lines_for(&[id]).await?;
        Ok(Some(OrderDetails {
            items: lines.remove(&id).unwrap_or_default(),
            order: row.order,
            customer_name: row.customer_name,
        }))
    }

    async fn create(&self, data: &NewOrder) -> AppResult<Order> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let now = Utc::now();
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (id, user_id, total_price, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.total_price())
        .bind(OrderStatus::Pending)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))?;

        for item in &data.items {
            sqlx::query(
                "INSERT INTO order_items (id, order_id, menu_item_id, quantity, price) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(order.id)
            .bind(item.menu_item_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create order item", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit order", e)
        })?;

        Ok(order)
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order status", e))
    }

    async fn totals_since(&self, since: DateTime<Utc>) -> AppResult<(i64, f64)> {
        sqlx::query_as::<_, (i64, f64)>(
            "SELECT COUNT(*), COALESCE(SUM(total_price), 0)::DOUBLE PRECISION \
             FROM orders WHERE created_at >= $1",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to total orders", e))
    }
}
