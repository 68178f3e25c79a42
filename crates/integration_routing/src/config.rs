//! Routing service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OSRM routing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmConfig {
    /// Base URL for the OSRM HTTP API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Routing profile (e.g., "driving", "cycling", "foot")
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_profile() -> String {
    "driving".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile: default_profile(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OsrmConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.profile.is_empty() || self.profile.contains('/') {
            return Err("profile must be a single non-empty path segment".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OsrmConfig::default();
        assert_eq!(config.base_url, "https://router.project-osrm.org");
        assert_eq!(config.profile, "driving");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_testing_config() {
        let config = OsrmConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = OsrmConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_profile() {
        let config = OsrmConfig {
            profile: "driving/extra".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = OsrmConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: OsrmConfig =
            serde_json::from_str(r#"{"profile": "cycling"}"#).expect("deserialize");
        assert_eq!(config.profile, "cycling");
        assert_eq!(config.base_url, "https://router.project-osrm.org");
    }
}
