//! Labelled coordinate

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Label shown for a start endpoint resolved from the device position
pub const CURRENT_LOCATION_LABEL: &str = "My Current Location";

/// A coordinate paired with the free-text label the user sees
///
/// The label may be empty, may still hold unresolved text, or may be the
/// [`CURRENT_LOCATION_LABEL`] sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    /// Free-text label
    pub label: String,
    /// Resolved position
    pub coord: Coordinate,
}

impl NamedLocation {
    /// Create a labelled location
    #[must_use]
    pub fn new(label: impl Into<String>, coord: Coordinate) -> Self {
        Self {
            label: label.into(),
            coord,
        }
    }

    /// A location with an empty label
    #[must_use]
    pub const fn unlabelled(coord: Coordinate) -> Self {
        Self {
            label: String::new(),
            coord,
        }
    }

    /// A location labelled as the device's current position
    #[must_use]
    pub fn current_location(coord: Coordinate) -> Self {
        Self::new(CURRENT_LOCATION_LABEL, coord)
    }

    /// Whether the label has no searchable text
    #[must_use]
    pub fn is_label_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}
