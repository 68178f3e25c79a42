//! Derived display state for a map surface

use domain::entities::TripPlan;
use domain::value_objects::{Coordinate, LocatingStatus, RouteMetrics};
use serde::{Deserialize, Serialize};

/// Zoom level the map is centered at
pub const DEFAULT_ZOOM: u8 = 13;

/// Locate button caption while idle
pub const LOCATE_IDLE_LABEL: &str = "📍 Current Location";

/// Locate button caption while a position request is outstanding
pub const LOCATE_BUSY_LABEL: &str = "Locating...";

/// A labelled point drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub position: Coordinate,
    pub label: String,
}

/// Everything a renderer needs to draw the current state
///
/// Built fresh from a [`TripPlan`]; holds no references back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub center: Coordinate,
    pub zoom: u8,
    pub start: MapMarker,
    pub destination: MapMarker,
    /// Straight segment from start to destination
    pub line: [Coordinate; 2],
    pub clicked: Option<MapMarker>,
    pub metrics: Option<RouteMetrics>,
    pub locating: LocatingStatus,
    pub revision: u64,
}

impl MapSnapshot {
    /// Derive the display state of `plan`
    #[must_use]
    pub fn from_plan(plan: &TripPlan) -> Self {
        let start = plan.start();
        let destination = plan.destination();

        Self {
            center: start.coord,
            zoom: DEFAULT_ZOOM,
            start: MapMarker {
                position: start.coord,
                label: format!("Start: {}", start.label),
            },
            destination: MapMarker {
                position: destination.coord,
                label: format!("Destination: {}", destination.label),
            },
            line: [start.coord, destination.coord],
            clicked: plan.clicked_point().map(|point| MapMarker {
                position: point.coord(),
                label: format!("Clicked Location: {point}"),
            }),
            metrics: plan.metrics(),
            locating: plan.locating_status(),
            revision: plan.revision(),
        }
    }

    /// The "Distance: X km | Time: Y mins" line, if metrics are known
    #[must_use]
    pub fn metrics_line(&self) -> Option<String> {
        self.metrics.map(|m| m.to_string())
    }

    /// Caption for the locate-me control
    #[must_use]
    pub const fn locate_label(&self) -> &'static str {
        if self.locating.is_in_progress() {
            LOCATE_BUSY_LABEL
        } else {
            LOCATE_IDLE_LABEL
        }
    }
}
