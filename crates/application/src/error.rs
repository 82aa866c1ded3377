//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (geocoder, location provider)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Device location could not be obtained
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// An operation exceeded its time budget
    #[error("Timed out after {0} ms")]
    Timeout(u64),

    /// Action not valid in the current screen state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalService(_) | Self::Timeout(_) | Self::LocationUnavailable(_)
        )
    }
}
