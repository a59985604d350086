//! Route handlers organized by domain.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod pages;
pub mod users;
