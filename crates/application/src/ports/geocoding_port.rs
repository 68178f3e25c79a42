//! Geocoding port
//!
//! Resolves free-text addresses to coordinates. Adapters in the
//! infrastructure layer implement this port on top of a search API.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to the best-matching coordinate
    ///
    /// Returns [`ApplicationError::NotFound`] when the service has no match and
    /// [`ApplicationError::ServiceUnavailable`] for transport, status, or payload
    /// failures.
    async fn resolve(&self, address: &str) -> Result<Coordinate, ApplicationError>;
}
