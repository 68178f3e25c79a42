//! Geocoding and routing integration for the route planner
//!
//! Provides address geocoding via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org)
//! and driving distance/duration lookup via the [OSRM](https://project-osrm.org) HTTP API.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] converts a
//! free-text address into a coordinate and is implemented by
//! [`NominatimGeocodingClient`]. [`RouteClient`] resolves a coordinate pair to
//! a [`RouteSummary`] and is implemented by [`OsrmRouteClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_routing::{OsrmConfig, OsrmRouteClient, RouteClient};
//!
//! let client = OsrmRouteClient::new(&OsrmConfig::default())?;
//! let summary = client.route(Coordinate::pune(), Coordinate::mumbai()).await?;
//! println!("{}", summary.metrics());
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{OsrmRouteClient, RouteClient};
pub use config::OsrmConfig;
pub use error::RoutingError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::RouteSummary;
