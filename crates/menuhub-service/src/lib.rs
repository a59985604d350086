//! # menuhub-service
//!
//! Business logic service layer for MenuHub. Each service orchestrates
//! repositories and auth components to implement one area of the back office.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time.

pub mod catalog;
pub mod context;
pub mod dashboard;
pub mod order;
pub mod user;

pub use catalog::{CategoryService, MenuItemService};
pub use context::RequestContext;
pub use dashboard::{DashboardService, DashboardStats};
pub use order::OrderService;
pub use user::AdminUserService;
