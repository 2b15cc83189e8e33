//! Convenience result type alias for OrderDesk.

use crate::error::AppError;

/// A specialized `Result` type for OrderDesk operations.
pub type AppResult<T> = Result<T, AppError>;
