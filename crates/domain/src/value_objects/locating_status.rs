//! Geolocation progress flag

use serde::{Deserialize, Serialize};

/// Whether a device position request is currently outstanding
///
/// Gates the "current location" control so it cannot be triggered twice
/// concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatingStatus {
    /// No request outstanding
    #[default]
    Idle,
    /// A request (or its retry) is outstanding
    InProgress,
}

impl LocatingStatus {
    /// Check if a request is outstanding
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}
