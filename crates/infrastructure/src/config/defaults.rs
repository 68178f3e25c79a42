//! Initial endpoint configuration

use domain::{Coordinate, DomainError, NamedLocation, TripPlan};
use serde::{Deserialize, Serialize};

/// An initial endpoint: label plus coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Text shown in the endpoint's input (default: empty)
    #[serde(default)]
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl EndpointConfig {
    fn from_coordinate(coord: Coordinate) -> Self {
        Self {
            label: String::new(),
            latitude: coord.latitude(),
            longitude: coord.longitude(),
        }
    }

    pub fn to_named_location(&self) -> Result<NamedLocation, DomainError> {
        Ok(NamedLocation::new(
            self.label.clone(),
            Coordinate::new(self.latitude, self.longitude)?,
        ))
    }
}

/// Endpoints the planner starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_start")]
    pub start: EndpointConfig,
    #[serde(default = "default_destination")]
    pub destination: EndpointConfig,
}

fn default_start() -> EndpointConfig {
    EndpointConfig::from_coordinate(Coordinate::pune())
}

fn default_destination() -> EndpointConfig {
    EndpointConfig::from_coordinate(Coordinate::mumbai())
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            destination: default_destination(),
        }
    }
}

impl DefaultsConfig {
    /// Build the initial trip plan
    pub fn to_trip_plan(&self) -> Result<TripPlan, DomainError> {
        Ok(TripPlan::new(
            self.start.to_named_location()?,
            self.destination.to_named_location()?,
        ))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.start
            .to_named_location()
            .map_err(|e| format!("start: {e}"))?;
        self.destination
            .to_named_location()
            .map_err(|e| format!("destination: {e}"))?;
        Ok(())
    }
}
