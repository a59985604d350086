//! # menuhub-api
//!
//! HTTP API layer for the MenuHub back office built on Axum.
//!
//! Provides the `/admin` REST endpoints, the admin page shells, the bearer
//! and cookie guards, request logging, CORS, extractors, and DTOs.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
