//! Order browsing and status changes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_database::OrderRepository;
use menuhub_entity::order::{Order, OrderDetails, OrderStatus};

/// Staff-side order operations.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// All orders with customer name and lines, newest first.
    pub async fn list(&self) -> AppResult<Vec<OrderDetails>> {
        self.orders.find_all().await
    }

    /// One order with its lines.
    pub async fn get(&self, id: Uuid) -> AppResult<OrderDetails> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))
    }

    /// Sets the status of an order from its wire name.
    pub async fn update_status(&self, id: Uuid, status: Option<&str>) -> AppResult<Order> {
        let status: OrderStatus = status
            .ok_or_else(|| AppError::validation("Invalid status value"))?
            .parse()?;

        let order = self
            .orders
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;
        info!(order_id = %id, status = %status, "Order status updated");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuhub_core::error::ErrorKind;
    use menuhub_database::memory::MemoryDatabase;
    use menuhub_entity::order::{NewOrder, NewOrderItem};

    async fn seeded() -> (OrderService, Uuid) {
        let repo: Arc<dyn OrderRepository> = Arc::new(MemoryDatabase::new().orders());
        let order = repo
            .create(&NewOrder {
                user_id: Uuid::new_v4(),
                items: vec![NewOrderItem {
                    menu_item_id: Uuid::new_v4(),
                    quantity: 3,
                    price: 2.0,
                }],
            })
            .await
            .unwrap();
        (OrderService::new(repo), order.id)
    }

    #[tokio::test]
    async fn test_update_status() {
        let (service, id) = seeded().await;

        let order = service.update_status(id, Some("shipped")).await.unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(service.get(id).await.unwrap().order.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_invalid_status_is_checked_before_lookup() {
        let (service, _) = seeded().await;

        let err = service
            .update_status(Uuid::new_v4(), Some("teleported"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid status value");

        let err = service
            .update_status(Uuid::new_v4(), Some("pending"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_unknown_order() {
        let (service, _) = seeded().await;
        let err = service.get(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.message, "Order not found");
    }
}
