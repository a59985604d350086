//! User administration.

pub mod admin;

pub use admin::{AdminUserService, CreateUserRequest, UpdateUserRequest};
