//! Nominatim geocoding client
//!
//! Converts free-form address strings to geographic coordinates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Implements rate limiting (max 1 request/second per Nominatim usage policy)
//! and optional result caching to minimize API calls. Only the first search
//! result is used.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use moka::future::Cache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Minimum spacing between two requests to the service
const MIN_REQUEST_SPACING: Duration = Duration::from_millis(1100);

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 to disable)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Comma-separated ISO country codes to restrict results (empty = worldwide)
    #[serde(default)]
    pub country_filter: String,

    /// Enforce the public instance's one-request-per-second policy
    #[serde(default = "default_rate_limit")]
    pub rate_limit: bool,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

const fn default_rate_limit() -> bool {
    true
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            country_filter: String::new(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            cache_ttl_hours: 0,
            rate_limit: false,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_hours > 0
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
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Rate limit exceeded (max 1 req/sec for Nominatim)
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Invalid client configuration
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Returns true if the service answered but had no match
    ///
    /// Every other variant means the service itself could not be used.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AddressNotFound(_))
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;
}

/// Nominatim-based geocoding client with rate limiting and caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, Coordinate>>,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(
                "route-planner/",
                env!("CARGO_PKG_VERSION"),
                " (OpenStreetMap Nominatim client)"
            ))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_hours * 3600))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Enforce Nominatim's rate limit (max 1 request per second)
    async fn rate_limit(&self) {
        if !self.config.rate_limit {
            return;
        }
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < MIN_REQUEST_SPACING {
                let wait = MIN_REQUEST_SPACING.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Parse the first search result into a coordinate
    fn parse_search_response(address: &str, body: &str) -> Result<Coordinate, GeocodingError> {
        let results: Vec<NominatimResult> =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let lat: f64 = result
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", result.lat)))?;
        let lon: f64 = result
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", result.lon)))?;

        Coordinate::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let cache_key = address.to_lowercase();
        if let Some(cache) = &self.cache {
            if let Some(coord) = cache.get(&cache_key).await {
                debug!(%address, "Geocoding cache hit");
                return Ok(coord);
            }
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params = vec![
            ("q", address.to_string()),
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let coord = Self::parse_search_response(address, &body)?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, coord).await;
        }
        debug!(%address, lat = coord.latitude(), lon = coord.longitude(), "Geocoded address");

        Ok(coord)
    }
}

/// Raw Nominatim API response entry; coordinates arrive as strings
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}
