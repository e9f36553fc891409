//! Unified error handling for the storefront engine.
//!
//! The failure taxonomy of the subsystem: storage corruption is recovered
//! inside the cart store and never reaches this type; validation failures
//! carry a user-facing message and change no state; API failures carry the
//! service's own message when it sent one. No variant is fatal.

use thiserror::Error;

use crate::api::ApiError;
use crate::cart::StoreError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Cart persistence failed.
    #[error("Cart storage error: {0}")]
    Storage(#[from] StoreError),

    /// User input failed validation.
    #[error("{0}")]
    Validation(String),

    /// The operation needs a logged-in account.
    #[error("Not logged in")]
    NotAuthenticated,

    /// Unexpected local failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The transient, user-facing message for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Storage(_) => "Could not save your cart".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::NotAuthenticated => "Please log in first".to_string(),
            Self::Internal(_) => "Something went wrong".to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
