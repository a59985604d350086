//! Menu category entities.

pub mod model;

pub use model::{Category, CategorySummary, CreateCategory, UpdateCategory};
