//! Logging initialisation
//!
//! Console tracing with an `EnvFilter`, text or JSON output.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, directive_for_verbosity, init_logging};
