//! Customer order entities.

pub mod model;
pub mod status;

pub use model::{NewOrder, NewOrderItem, Order, OrderDetails, OrderItem, OrderLine};
pub use status::OrderStatus;
