//! Auth Error Types
//!
//! This module provides login-module error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::callback::CallbackError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Wrong credentials are not an error: `login` reports them as `Ok(false)`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential collection could not complete
    #[error("Credential callback failed: {0}")]
    CallbackFailure(#[from] CallbackError),

    /// A lifecycle method was called before `initialize`
    #[error("Login module is not initialized")]
    NotInitialized,
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::CallbackFailure(CallbackError::Io(_)) => ErrorKind::Io,
            AuthError::CallbackFailure(CallbackError::Unsupported { .. }) => {
                ErrorKind::Unsupported
            }
            AuthError::NotInitialized => ErrorKind::InvalidState,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::NotInitialized => err.with_hint("Call initialize() first"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::CallbackFailure(e) => {
                tracing::error!(error = %e, "Can not authenticate user");
            }
            AuthError::NotInitialized => {
                tracing::warn!("Login module used before initialize");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error().with_source(err)
    }
}
