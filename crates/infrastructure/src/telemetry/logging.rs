//! Tracing subscriber setup for the command-line binary

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directive used when neither `RUST_LOG` nor a verbosity flag is given
    /// (e.g. "route_planner=info,integration_routing=debug")
    #[serde(default)]
    pub filter: Option<String>,
}

/// Error type for logging initialisation
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed or the filter was invalid
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Map a `-v` count to a default filter directive
#[must_use]
pub const fn directive_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(config: &LoggingConfig, verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    match (&config.filter, verbosity) {
        (Some(directive), 0) => EnvFilter::new(directive),
        _ => EnvFilter::new(directive_for_verbosity(verbosity)),
    }
}

/// Install the global tracing subscriber
///
/// Log lines go to stderr so stdout stays free for command output.
/// `RUST_LOG` takes precedence over both the verbosity count and the
/// configured filter.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config, verbosity);
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_directives() {
        assert_eq!(directive_for_verbosity(0), "warn");
        assert_eq!(directive_for_verbosity(1), "info");
        assert_eq!(directive_for_verbosity(2), "debug");
        assert_eq!(directive_for_verbosity(3), "trace");
        assert_eq!(directive_for_verbosity(200), "trace");
    }

    #[test]
    fn format_deserializes_lowercase() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.filter.is_none());
    }

    #[test]
    fn default_is_text() {
        assert_eq!(LoggingConfig::default().format, LogFormat::Text);
    }

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config, 0);
        assert!(matches!(init_logging(&config, 0), Err(TelemetryError::Init(_))));
    }
}
