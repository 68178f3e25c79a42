//! Device position port
//!
//! Abstracts the platform capability that reports the device's current
//! position. Retry behaviour lives in the application layer, not here.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options passed with every position request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOptions {
    /// Ask for the most accurate fix the device can give
    pub high_accuracy: bool,
    /// How long a single attempt may take
    pub timeout: Duration,
    /// Maximum age of a cached fix; zero means a fresh fix is required
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Failure reported by a position source for a single attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The attempt did not produce a fix within the allowed time
    #[error("Location request timed out")]
    Timeout,

    /// The user or platform refused access to the position
    #[error("{0}")]
    PermissionDenied(String),

    /// The platform could not determine a position
    #[error("{0}")]
    PositionUnavailable(String),

    /// The capability does not exist on this device
    #[error("Geolocation is not supported")]
    Unsupported,
}

impl PositionError {
    /// Only timeouts are worth another attempt
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Port for obtaining the device's current position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PositionSourcePort: Send + Sync {
    /// Whether the device has a position capability at all
    fn is_supported(&self) -> bool {
        true
    }

    /// Make one attempt to get the current position
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, PositionError>;
}
