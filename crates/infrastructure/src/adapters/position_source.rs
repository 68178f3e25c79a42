//! Position sources for the geolocation provider

use application::ports::{PositionError, PositionOptions, PositionSourcePort};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use tracing::debug;

use crate::config::GeolocationAppConfig;

/// Reports a configured, unchanging position
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionSource {
    position: Coordinate,
}

impl FixedPositionSource {
    pub const fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl PositionSourcePort for FixedPositionSource {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, PositionError> {
        debug!(position = %self.position, high_accuracy = options.high_accuracy, "Reporting fixed position");
        Ok(self.position)
    }
}

/// A device without position capability
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPositionSource;

#[async_trait]
impl PositionSourcePort for UnsupportedPositionSource {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionError> {
        Err(PositionError::Unsupported)
    }
}

/// Pick the position source described by the configuration
///
/// An invalid fixed position is treated as no capability.
pub fn position_source_from_config(
    config: &GeolocationAppConfig,
) -> std::sync::Arc<dyn PositionSourcePort> {
    match config.fixed_position.map(|p| p.to_coordinate()) {
        Some(Ok(coord)) => std::sync::Arc::new(FixedPositionSource::new(coord)),
        _ => std::sync::Arc::new(UnsupportedPositionSource),
    }
}
