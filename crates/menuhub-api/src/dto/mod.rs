//! Data Transfer Objects for API request/response serialization.

pub mod request;
pub mod response;
