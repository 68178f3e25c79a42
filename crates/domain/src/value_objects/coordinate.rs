//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A geographic coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]. NaN is rejected as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without validation (for compile-time constants)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Round both axes to the given number of decimal places
    ///
    /// Rounding never leaves the valid range, so the result stays valid.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            latitude: round_to(self.latitude, decimals),
            longitude: round_to(self.longitude, decimals),
        }
    }

    /// Format as `lon,lat`, the axis order routing services expect in paths
    #[must_use]
    pub fn to_lon_lat_pair(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

/// Round a value to `decimals` decimal places (half away from zero)
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"` (whitespace around either part is ignored)
impl FromStr for Coordinate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::InvalidCoordinateFormat(s.to_string()));
        };
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidCoordinateFormat(s.to_string()))?;
        let longitude = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidCoordinateFormat(s.to_string()))?;
        Self::new(latitude, longitude)
    }
}

/// Well-known coordinates used as initial endpoints
impl Coordinate {
    /// Pune, India
    #[must_use]
    pub const fn pune() -> Self {
        Self::new_unchecked(18.5204, 73.8567)
    }

    /// Mumbai, India
    #[must_use]
    pub const fn mumbai() -> Self {
        Self::new_unchecked(19.076, 72.8777)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let coord = Coordinate::new(18.5204, 73.8567).expect("valid coordinates");
        assert!((coord.latitude() - 18.5204).abs() < f64::EPSILON);
        assert!((coord.longitude() - 73.8567).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(Coordinate::new(0.0, 181.0).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_rounded_to_five_decimals() {
        let coord = Coordinate::new(18.520_412_345, 73.856_712_345).expect("valid");
        let rounded = coord.rounded(5);
        assert!((rounded.latitude() - 18.52041).abs() < 1e-9);
        assert!((rounded.longitude() - 73.85671).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert!((round_to(1.005_000_1, 2) - 1.01).abs() < 1e-9);
        assert!((round_to(-0.125_01, 2) + 0.13).abs() < 1e-9);
    }

    #[test]
    fn test_lon_lat_pair_order() {
        let coord = Coordinate::pune();
        assert_eq!(coord.to_lon_lat_pair(), "73.8567,18.5204");
    }

    #[test]
    fn test_display() {
        let coord = Coordinate::mumbai();
        assert_eq!(coord.to_string(), "19.076000, 72.877700");
    }

    #[test]
    fn test_from_str() {
        let coord: Coordinate = " 18.5 , 73.8 ".parse().expect("parse");
        assert!((coord.latitude() - 18.5).abs() < f64::EPSILON);
        assert!((coord.longitude() - 73.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("18.5".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
        assert!("1,2,3".parse::<Coordinate>().is_err());
        assert!(matches!(
            "95,10".parse::<Coordinate>(),
            Err(DomainError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let coord = Coordinate::pune();
        let json = serde_json::to_string(&coord).expect("serialize");
        assert!(json.contains("18.5204"));

        let deserialized: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(coord, deserialized);
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{"latitude": 120.0, "longitude": 0.0}"#;
        assert!(serde_json::from_str::<Coordinate>(json).is_err());
    }
}
