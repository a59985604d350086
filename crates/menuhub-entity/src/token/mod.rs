//! Refresh-token persistence and issued token values.

pub mod pair;
pub mod record;

pub use pair::TokenPair;
pub use record::TokenRecord;
