//! Unified error handling.
//!
//! State-root operations return [`AppError`]. Note that
//! [`AppError::AuthRequired`] is control flow rather than a failure: it tells
//! the caller to open the login prompt instead of performing the mutation,
//! which is silently absorbed (not queued for retry after login).

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront state core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The operation needs an authenticated session; the caller should
    /// prompt for login.
    #[error("authentication required")]
    AuthRequired,
}

/// Result type alias for [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_required_display() {
        assert_eq!(AppError::AuthRequired.to_string(), "authentication required");
    }

    #[test]
    fn test_auth_error_wraps() {
        let err = AppError::from(AuthError::PasswordMismatch);
        assert!(matches!(err, AppError::Auth(AuthError::PasswordMismatch)));
    }
}
