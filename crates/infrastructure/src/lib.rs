//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! Nominatim and OSRM clients and the configured position source. Also owns
//! configuration loading and tracing initialisation.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DefaultsConfig, EndpointConfig, GeolocationAppConfig, PositionConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
