//! Routing adapter - Implements RoutingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::value_objects::{Coordinate, RouteMetrics};
use integration_routing::{OsrmConfig, OsrmRouteClient, RouteClient, RoutingError};
use tracing::{debug, instrument, warn};

/// Adapter for driving routes via OSRM
pub struct RoutingAdapter {
    client: Arc<dyn RouteClient>,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"dyn RouteClient")
            .finish()
    }
}

impl RoutingAdapter {
    pub fn new(client: Arc<dyn RouteClient>) -> Self {
        Self { client }
    }

    /// Build the adapter around an OSRM client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &OsrmConfig) -> Result<Self, ApplicationError> {
        let client = OsrmRouteClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    fn map_error(error: RoutingError) -> ApplicationError {
        if error.is_no_route() {
            return ApplicationError::RouteNotFound(error.to_string());
        }
        match error {
            RoutingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ServiceUnavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self))]
    async fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteMetrics, ApplicationError> {
        match self.client.route(from, to).await {
            Ok(summary) => {
                let metrics = summary.metrics();
                debug!(%metrics, "Route found");
                Ok(metrics)
            },
            Err(e) => {
                warn!(error = %e, "Route lookup failed");
                Err(Self::map_error(e))
            },
        }
    }
}
