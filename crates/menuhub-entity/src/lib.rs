//! # menuhub-entity
//!
//! Domain entity models for the MenuHub back office. Every struct in this
//! crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod token;
pub mod user;
