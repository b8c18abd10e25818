//! Authentication error types.

use thiserror::Error;

use localmart_core::EmailError;

use crate::api::ApiError;
use crate::models::user::AccountConversionError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password and confirmation do not match.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The account API rejected the credentials or registration; the
    /// message is the API's human-readable reason.
    #[error("{0}")]
    Rejected(String),

    /// The API accepted the request but returned an unusable user record.
    #[error("malformed account record: {0}")]
    InvalidAccount(#[from] AccountConversionError),

    /// Account API call failed.
    #[error("account API error: {0}")]
    Api(#[from] ApiError),

    /// A newer authentication request was dispatched while this one was in
    /// flight; its response has been discarded.
    #[error("superseded by a newer authentication request")]
    Superseded,
}
