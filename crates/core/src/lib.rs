//! Shared primitives for all Rust crates in Courseforge.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Courseforge crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// User is not authenticated or not allowed to access a resource.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn error_display_includes_category_and_detail() {
        let error = AppError::NotFound("context '42' does not exist".to_owned());
        assert_eq!(
            error.to_string(),
            "not found: context '42' does not exist"
        );
    }
}
