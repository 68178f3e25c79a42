//! Distance and travel time between the endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coordinate::round_to;

/// Result of a successful route lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Distance in kilometers, rounded to 2 decimals
    distance_km: f64,
    /// Duration in whole minutes
    duration_min: u32,
}

impl RouteMetrics {
    /// Build metrics from raw routing output (meters and seconds)
    ///
    /// Negative or non-finite inputs are treated as zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_meters_seconds(distance_m: f64, duration_s: f64) -> Self {
        let distance_m = if distance_m.is_finite() { distance_m.max(0.0) } else { 0.0 };
        let duration_s = if duration_s.is_finite() { duration_s.max(0.0) } else { 0.0 };
        let minutes = (duration_s / 60.0).round().min(f64::from(u32::MAX));
        Self {
            distance_km: round_to(distance_m / 1000.0, 2),
            duration_min: minutes as u32,
        }
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Duration in minutes
    #[must_use]
    pub const fn duration_min(&self) -> u32 {
        self.duration_min
    }

    /// Distance as shown to the user, always with two decimals
    #[must_use]
    pub fn distance_display(&self) -> String {
        format!("{:.2}", self.distance_km)
    }

    /// Duration as shown to the user
    #[must_use]
    pub fn duration_display(&self) -> String {
        self.duration_min.to_string()
    }
}

impl fmt::Display for RouteMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {} km | Time: {} mins",
            self.distance_display(),
            self.duration_display()
        )
    }
}
