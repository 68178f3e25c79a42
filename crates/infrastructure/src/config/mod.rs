//! Application configuration
//!
//! Split into focused sub-modules:
//! - `geolocation`: position request options, retry policy, position source
//! - `defaults`: initial start and destination
//!
//! Geocoding and routing sections reuse the client configs from
//! `integration_routing`; logging reuses the telemetry config.

mod defaults;
mod geolocation;

use std::path::Path;

use application::ApplicationError;
use integration_routing::{NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::LoggingConfig;

pub use defaults::{DefaultsConfig, EndpointConfig};
pub use geolocation::{GeolocationAppConfig, PositionConfig};

/// Prefix for environment overrides, e.g. `ROUTE_PLANNER_ROUTING__PROFILE=cycling`
pub const ENV_PREFIX: &str = "ROUTE_PLANNER";

/// Separator between nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoding service
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM routing service
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Device position
    #[serde(default)]
    pub geolocation: GeolocationAppConfig,

    /// Initial endpoints
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file, and the environment
    ///
    /// With `path` the file must exist; without it `config.toml` in the
    /// working directory is read if present. Environment variables such as
    /// `ROUTE_PLANNER_GEOCODING__COUNTRY_FILTER=in` override both.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(
            path,
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
    }

    fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(file = ?path, "Configuration loaded");
        Ok(app_config)
    }

    /// Configuration pointing at real services with test-friendly timings
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            geocoding: NominatimConfig::for_testing(),
            routing: OsrmConfig::for_testing(),
            geolocation: GeolocationAppConfig::for_testing(),
            defaults: DefaultsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let checks = [
            ("geocoding", self.geocoding.validate()),
            ("routing", self.routing.validate()),
            ("geolocation", self.geolocation.validate()),
            ("defaults", self.defaults.validate()),
        ];

        for (section, result) in checks {
            result.map_err(|e| ApplicationError::Configuration(format!("{section}: {e}")))?;
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}
