//! Convenience result type alias for MenuHub.

use crate::error::AppError;

/// A specialized `Result` type for MenuHub operations.
pub type AppResult<T> = Result<T, AppError>;
