//! User domain entities.

pub mod model;
pub mod role;

pub use model::{ADMIN_PAGES, CreateUser, DEFAULT_PERMISSION, UpdateUser, User, normalize_email};
pub use role::UserRole;
