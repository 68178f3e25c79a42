//! User-facing notices
//!
//! Every failure the coordinator handles becomes a [`Notice`]. How a notice is
//! shown is up to the [`NoticePort`](crate::ports::NoticePort) implementation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a notice is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Geocoding found nothing for the typed address
    AddressNotFound,
    /// The device cannot report its position at all
    GeolocationUnsupported,
    /// The device position request failed or timed out for good
    GeolocationFailed,
    /// A timed-out position request is being tried again
    GeolocationRetrying,
    /// The routing service has no route between the endpoints
    RouteNotFound,
    /// A geocoding or routing request could not be completed
    ServiceUnavailable,
}

impl NoticeKind {
    /// Whether this notice reports a failed operation
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::GeolocationRetrying)
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn address_not_found(address: &str) -> Self {
        Self::new(
            NoticeKind::AddressNotFound,
            format!("Location \"{address}\" not found."),
        )
    }

    #[must_use]
    pub fn geolocation_unsupported() -> Self {
        Self::new(
            NoticeKind::GeolocationUnsupported,
            "Geolocation is not supported by your device.",
        )
    }

    #[must_use]
    pub fn geolocation_failed(reason: &str) -> Self {
        Self::new(
            NoticeKind::GeolocationFailed,
            format!("Error fetching location: {reason}. Please ensure GPS is enabled."),
        )
    }

    #[must_use]
    pub fn geolocation_retrying() -> Self {
        Self::new(
            NoticeKind::GeolocationRetrying,
            "Location request timed out. Retrying...",
        )
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::new(
            NoticeKind::RouteNotFound,
            "No route found between the selected locations.",
        )
    }

    /// `service` names the failing dependency, e.g. "Geocoding" or "Routing"
    #[must_use]
    pub fn service_unavailable(service: &str, detail: &str) -> Self {
        Self::new(
            NoticeKind::ServiceUnavailable,
            format!("{service} service unavailable: {detail}"),
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
