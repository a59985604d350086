//! # menuhub-database
//!
//! Repository traits for every MenuHub entity, a PostgreSQL implementation
//! backed by sqlx, and an in-memory implementation used by tests and the
//! `memory` backend.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;
pub mod traits;

pub use connection::DatabasePool;
pub use store::Repositories;
pub use traits::{
    CategoryRepository, MenuItemRepository, OrderRepository, TokenRepository, UserRepository,
};
