//! Endpoint selector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Either end of a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Where the trip begins
    Start,
    /// Where the trip ends
    Destination,
}

impl Endpoint {
    /// Capitalized label used as a marker prefix
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Destination => "Destination",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Destination => write!(f, "destination"),
        }
    }
}
