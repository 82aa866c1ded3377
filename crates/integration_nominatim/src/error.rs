//! Geocoding error types

use thiserror::Error;

/// Errors that can occur while talking to the geocoding service
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned an unexpected status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Provider has nothing at the requested position
    #[error("No place found: {0}")]
    NotFound(String),

    /// Failed to parse the response body
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Provider asked us to slow down
    #[error("Geocoding rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by the API)
        retry_after_secs: Option<u64>,
    },

    /// Provider is temporarily unavailable (5xx)
    #[error("Geocoding service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The query itself is unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeocodingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}
