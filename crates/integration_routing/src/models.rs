//! Routing data models
//!
//! Typed view of the OSRM `route` service response.

use domain::value_objects::RouteMetrics;
use serde::{Deserialize, Serialize};

/// Raw distance/duration of the first route returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Distance in meters
    pub distance_meters: f64,
    /// Duration in seconds
    pub duration_seconds: f64,
}

impl RouteSummary {
    /// Convert to user-facing metrics (km with 2 decimals, whole minutes)
    #[must_use]
    pub fn metrics(&self) -> RouteMetrics {
        RouteMetrics::from_meters_seconds(self.distance_meters, self.duration_seconds)
    }
}

/// OSRM route response body
#[derive(Debug, Deserialize)]
pub(crate) struct RawRouteResponse {
    /// "Ok" on success, an error code such as "NoRoute" otherwise
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Absent on error responses
    #[serde(default)]
    pub routes: Option<Vec<RawRoute>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    pub distance: f64,
    pub duration: f64,
}

impl RawRouteResponse {
    /// Whether the service reported that no route exists
    pub(crate) fn is_no_route_code(&self) -> bool {
        matches!(self.code.as_deref(), Some("NoRoute" | "NoSegment"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_to_metrics() {
        let summary = RouteSummary {
            distance_meters: 150_000.0,
            duration_seconds: 9000.0,
        };
        let metrics = summary.metrics();
        assert_eq!(metrics.distance_display(), "150.00");
        assert_eq!(metrics.duration_display(), "150");
    }

    #[test]
    fn test_parse_ok_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{"distance": 148236.7, "duration": 10512.3, "weight": 10512.3}],
            "waypoints": []
        }"#;
        let raw: RawRouteResponse = serde_json::from_str(json).expect("parse");
        let routes = raw.routes.expect("routes");
        assert_eq!(routes.len(), 1);
        assert!((routes[0].distance - 148_236.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_no_route_response() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let raw: RawRouteResponse = serde_json::from_str(json).expect("parse");
        assert!(raw.routes.is_none());
        assert!(raw.is_no_route_code());
        assert_eq!(raw.message.as_deref(), Some("Impossible route between points"));
    }

    #[test]
    fn test_other_codes_are_not_no_route() {
        let raw: RawRouteResponse =
            serde_json::from_str(r#"{"code": "InvalidQuery"}"#).expect("parse");
        assert!(!raw.is_no_route_code());
    }
}
