//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding yielded no result for the address
    #[error("Address not found: {0}")]
    NotFound(String),

    /// No route exists between the two points
    #[error("No route found: {0}")]
    RouteNotFound(String),

    /// An external service could not be used (transport, status, or payload failure)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Device position capability missing, denied, or unable to produce a fix
    #[error("Geolocation unavailable: {0}")]
    Unavailable(String),

    /// Device position request timed out on every permitted attempt
    #[error("Geolocation timed out: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
