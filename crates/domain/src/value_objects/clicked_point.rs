//! Point picked on the map

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;

/// Decimal places kept for a clicked point
pub const CLICK_PRECISION: i32 = 5;

/// A map click, rounded to [`CLICK_PRECISION`] decimals for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickedPoint(Coordinate);

impl ClickedPoint {
    /// Round a raw click position
    #[must_use]
    pub fn from_click(raw: Coordinate) -> Self {
        Self(raw.rounded(CLICK_PRECISION))
    }

    /// The rounded coordinate
    #[must_use]
    pub const fn coord(&self) -> Coordinate {
        self.0
    }
}

impl fmt::Display for ClickedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.5}, {:.5}]", self.0.latitude(), self.0.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_is_rounded() {
        let raw = Coordinate::new(18.520_412_345, 73.856_712_345).expect("valid");
        let point = ClickedPoint::from_click(raw);
        assert!((point.coord().latitude() - 18.52041).abs() < 1e-9);
        assert!((point.coord().longitude() - 73.85671).abs() < 1e-9);
    }

    #[test]
    fn display_keeps_trailing_zeros() {
        let point = ClickedPoint::from_click(Coordinate::new(18.5, -73.25).expect("valid"));
        assert_eq!(point.to_string(), "[18.50000, -73.25000]");
    }
}
