//! Routing error types

use thiserror::Error;

/// Errors that can occur during route lookups
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No route exists between origin and destination
    #[error("No route found from {from} to {to}")]
    NoRouteFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if the service answered but found no route
    ///
    /// Every other variant means the service itself could not be used.
    #[must_use]
    pub const fn is_no_route(&self) -> bool {
        matches!(self, Self::NoRouteFound { .. })
    }
}
