//! HTTP-level integration tests against the in-memory backend.

mod auth_test;
mod catalog_test;
mod helpers;
mod order_test;
mod page_test;
mod user_test;
