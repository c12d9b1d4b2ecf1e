//! Convenience result type alias for Newsdesk.

use crate::error::AppError;

/// A specialized `Result` type for Newsdesk operations.
pub type AppResult<T> = Result<T, AppError>;
