//! Convenience result type alias for the favorites engine.

use crate::error::AppError;

/// A specialized `Result` type for favorites operations.
pub type AppResult<T> = Result<T, AppError>;
