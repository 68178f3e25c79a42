//! OSRM driving route client
//!
//! Looks up distance and duration between two coordinates using the
//! [OSRM route service](https://project-osrm.org/docs/v5.24.0/api/#route-service).
//! Coordinates travel in the path as `lon,lat;lon,lat`.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::OsrmConfig;
use crate::error::RoutingError;
use crate::models::{RawRouteResponse, RouteSummary};

/// Trait for routing service clients
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Resolve distance and duration of the first route between two points
    async fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RoutingError>;
}

/// OSRM-based routing client
#[derive(Debug)]
pub struct OsrmRouteClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmRouteClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("route-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the route URL; longitude comes first for each point
    fn route_url(&self, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.to_lon_lat_pair(),
            to.to_lon_lat_pair()
        )
    }

    /// Interpret a response body according to its HTTP status
    fn parse_route_response(
        status: StatusCode,
        body: &str,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteSummary, RoutingError> {
        let no_route = || RoutingError::NoRouteFound {
            from: from.to_lon_lat_pair(),
            to: to.to_lon_lat_pair(),
        };

        let parsed = serde_json::from_str::<RawRouteResponse>(body);

        if !status.is_success() {
            // OSRM answers 400 with a JSON code when the points cannot be connected
            if let Ok(raw) = &parsed {
                if raw.is_no_route_code() {
                    debug!(code = ?raw.code, message = ?raw.message, "Routing service reported no route");
                    return Err(no_route());
                }
            }
            return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
        }

        let raw = parsed.map_err(|e| RoutingError::ParseError(e.to_string()))?;
        if raw.is_no_route_code() {
            return Err(no_route());
        }

        let route = raw
            .routes
            .as_deref()
            .and_then(<[_]>::first)
            .ok_or_else(no_route)?;

        Ok(RouteSummary {
            distance_meters: route.distance,
            duration_seconds: route.duration,
        })
    }
}

#[async_trait]
impl RouteClient for OsrmRouteClient {
    #[instrument(skip(self), fields(from = %from.to_lon_lat_pair(), to = %to.to_lon_lat_pair()))]
    async fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RoutingError> {
        let url = self.route_url(from, to);

        debug!(%url, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "false")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimitExceeded);
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let result = Self::parse_route_response(status, &body, from, to);
        match &result {
            Ok(summary) => debug!(
                distance_m = summary.distance_meters,
                duration_s = summary.duration_seconds,
                "Route found"
            ),
            Err(e) => warn!(error = %e, "Route lookup failed"),
        }
        result
    }
}
