//! # menuhub-core
//!
//! Core crate for the MenuHub admin back office. Contains configuration
//! schemas and the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other MenuHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
