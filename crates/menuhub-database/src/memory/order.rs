//! In-memory order repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use menuhub_core::result::AppResult;
use menuhub_entity::order::{
    NewOrder, Order, OrderDetails, OrderItem, OrderLine, OrderStatus,
};

use super::Tables;
use crate::traits::OrderRepository;

/// Order repository backed by locked collections.
#[derive(Debug, Clone)]
pub struct MemoryOrderRepository {
    tables: Arc<Tables>,
}

impl MemoryOrderRepository {
    pub(crate) fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }

    /// Join customer name and lines onto an order.
    async fn details(&self, order: Order) -> OrderDetails {
        let customer_name = self
            .tables
            .users
            .read()
            .await
            .get(&order.user_id)
            .map(|u| u.name.clone());

        let menu_items = self.tables.menu_items.read().await;
        let items = self
            .tables
            .order_items
            .read()
            .await
            .iter()
            .filter(|i| i.order_id == order.id)
            .map(|i| OrderLine {
                id: i.id,
                menu_item_id: i.menu_item_id,
                menu_item_name: menu_items.get(&i.menu_item_id).map(|m| m.name.clone()),
                quantity: i.quantity,
                price: i.price,
            })
            .collect();

        OrderDetails {
            order,
            customer_name,
            items,
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn find_all(&self) -> AppResult<Vec<OrderDetails>> {
        let mut orders: Vec<Order> = self.tables.orders.read().await.values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            details.push(self.details(order).await);
        }
        Ok(details)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<OrderDetails>> {
        let order = self.tables.orders.read().await.get(&id).cloned();
        match order {
            Some(order) => Ok(Some(self.details(order).await)),
            None => Ok(None),
        }
    }

    async fn create(&self, data: &NewOrder) -> AppResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            total_price: data.total_price(),
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let mut orders = self.tables.orders.write().await;
        let mut lines = self.tables.order_items.write().await;
        lines.extend(data.items.iter().map(|item| OrderItem {
            id: Uuid::new_v4(),
            order_id: order.id,
            menu_item_id: item.menu_item_id,
            quantity: item.quantity,
            price: item.price,
        }));
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> AppResult<Option<Order>> {
        let mut orders = self.tables.orders.write().await;
        let Some(order) = orders.get_mut(&id) else {
            return Ok(None);
        };
        order.status = status;
        order.updated_at = Utc::now();
        Ok(Some(order.clone()))
    }

    async fn totals_since(&self, since: DateTime<Utc>) -> AppResult<(i64, f64)> {
        let orders = self.tables.orders.read().await;
        let today: Vec<&Order> = orders.values().filter(|o| o.created_at >= since).collect();
        let revenue = today.iter().map(|o| o.total_price).sum();
        Ok((today.len() as i64, revenue))
    }
}
