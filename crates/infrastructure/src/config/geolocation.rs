//! Device position configuration

use std::time::Duration;

use application::{GeolocationRetryPolicy, PositionOptions};
use domain::{Coordinate, DomainError};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl PositionConfig {
    /// Convert to a validated domain `Coordinate`
    pub fn to_coordinate(&self) -> Result<Coordinate, DomainError> {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Geolocation request options, retry policy and position source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocationAppConfig {
    /// Request the most accurate fix available (default: true)
    #[serde(default = "default_true")]
    pub high_accuracy: bool,

    /// Per-attempt timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum age of an accepted cached fix in seconds (default: 0)
    #[serde(default)]
    pub maximum_age_secs: u64,

    /// Retries after a timed-out attempt (default: 1, capped at 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before a retry in seconds (default: 3)
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Position reported by this device; geolocation is unsupported when absent
    #[serde(default)]
    pub fixed_position: Option<PositionConfig>,
}

const fn default_true() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_retries() -> u32 {
    1
}

const fn default_retry_delay_secs() -> u64 {
    3
}

impl Default for GeolocationAppConfig {
    fn default() -> Self {
        Self {
            high_accuracy: default_true(),
            timeout_secs: default_timeout_secs(),
            maximum_age_secs: 0,
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            fixed_position: None,
        }
    }
}

impl GeolocationAppConfig {
    /// Configuration with no retry delay and a fixed position at Pune
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            retry_delay_secs: 0,
            fixed_position: Some(PositionConfig {
                latitude: 18.5204,
                longitude: 73.8567,
            }),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn position_options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_secs(self.timeout_secs),
            maximum_age: Duration::from_secs(self.maximum_age_secs),
        }
    }

    #[must_use]
    pub fn retry_policy(&self) -> GeolocationRetryPolicy {
        GeolocationRetryPolicy::new(self.max_retries, Duration::from_secs(self.retry_delay_secs))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if let Some(position) = &self.fixed_position {
            position.to_coordinate().map_err(|e| format!("fixed_position: {e}"))?;
        }

        Ok(())
    }
}
