//! Refresh-token session lifecycle.

pub mod manager;
pub mod store;

pub use manager::{ExpiryReason, LoginGrant, RefreshOutcome, SessionManager};
pub use store::{Rotation, TokenStore};
