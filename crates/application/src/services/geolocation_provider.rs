//! Device geolocation with bounded retry on timeout
//!
//! Wraps a [`PositionSourcePort`] and retries timed-out attempts a limited
//! number of times. Any other failure ends the request immediately.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::value_objects::Coordinate;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{PositionError, PositionOptions, PositionSourcePort};

/// Upper bound on configured retries
pub const MAX_RETRIES_CAP: u32 = 3;

/// How many timed-out attempts are retried and how long to wait between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationRetryPolicy {
    max_retries: u32,
    retry_delay: Duration,
}

impl Default for GeolocationRetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            retry_delay: Duration::from_secs(3),
        }
    }
}

impl GeolocationRetryPolicy {
    /// `max_retries` is capped at [`MAX_RETRIES_CAP`]
    #[must_use]
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries: max_retries.min(MAX_RETRIES_CAP),
            retry_delay,
        }
    }

    /// A policy that never retries
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            retry_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Total attempts including the first one
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

/// Obtains the device position, retrying timeouts per policy
pub struct GeolocationProvider {
    source: Arc<dyn PositionSourcePort>,
    options: PositionOptions,
    policy: GeolocationRetryPolicy,
}

impl fmt::Debug for GeolocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeolocationProvider")
            .field("options", &self.options)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl GeolocationProvider {
    pub fn new(source: Arc<dyn PositionSourcePort>) -> Self {
        Self {
            source,
            options: PositionOptions::default(),
            policy: GeolocationRetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: GeolocationRetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn policy(&self) -> GeolocationRetryPolicy {
        self.policy
    }

    /// Whether the underlying device can report a position
    pub fn is_supported(&self) -> bool {
        self.source.is_supported()
    }

    /// Request the current position
    ///
    /// Each attempt is bounded by `options.timeout`; a source that does not
    /// answer in time counts as a timed-out attempt. `on_retry` is called
    /// with the 1-based retry number before each retry is scheduled.
    /// Exhausting all attempts yields [`ApplicationError::Timeout`].
    #[instrument(skip(self, on_retry), fields(max_attempts = self.policy.max_attempts()))]
    pub async fn locate<F>(&self, mut on_retry: F) -> Result<Coordinate, ApplicationError>
    where
        F: FnMut(u32) + Send,
    {
        let mut retries = 0;

        loop {
            let error = match self.attempt().await {
                Ok(coord) => {
                    debug!(retries, "Position fix obtained");
                    return Ok(coord);
                },
                Err(error) => error,
            };

            if error.is_retryable() && retries < self.policy.max_retries {
                retries += 1;
                warn!(retry = retries, "Position request timed out, retrying");
                on_retry(retries);
                tokio::time::sleep(self.policy.retry_delay).await;
                continue;
            }

            return Err(match error {
                PositionError::Timeout => {
                    let attempts = self.policy.max_attempts();
                    warn!(attempts, "Position request timed out on every attempt");
                    ApplicationError::Timeout(format!(
                        "Location request timed out after {attempts} attempt(s)"
                    ))
                },
                PositionError::Unsupported => {
                    ApplicationError::Unavailable(PositionError::Unsupported.to_string())
                },
                PositionError::PermissionDenied(reason)
                | PositionError::PositionUnavailable(reason) => {
                    warn!(%reason, "Position request failed");
                    ApplicationError::Unavailable(reason)
                },
            });
        }
    }

    /// One attempt, cut off after `options.timeout`
    async fn attempt(&self) -> Result<Coordinate, PositionError> {
        match timeout(self.options.timeout, self.source.current_position(&self.options)).await {
            Ok(result) => result,
            Err(_) => {
                debug!(timeout = ?self.options.timeout, "Position source did not answer in time");
                Err(PositionError::Timeout)
            },
        }
    }
}
