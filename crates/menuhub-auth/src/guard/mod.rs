//! Request guards.

pub mod access;
pub mod page;

pub use access::AccessGuard;
pub use page::{PageDenial, PageGuard};
