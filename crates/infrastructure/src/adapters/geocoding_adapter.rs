//! Geocoding adapter - Implements GeocodingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use integration_routing::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
use tracing::{debug, instrument, warn};

/// Adapter for address lookup via Nominatim
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"dyn GeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Build the adapter around a Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    fn map_error(error: GeocodingError) -> ApplicationError {
        match error {
            GeocodingError::AddressNotFound(address) => ApplicationError::NotFound(address),
            GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ServiceUnavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Result<Coordinate, ApplicationError> {
        match self.client.geocode(address).await {
            Ok(coord) => {
                debug!(%coord, "Address resolved");
                Ok(coord)
            },
            Err(e) => {
                if !e.is_not_found() {
                    warn!(error = %e, "Geocoding request failed");
                }
                Err(Self::map_error(e))
            },
        }
    }
}
