//! Builds the coordinator from configuration

use std::sync::Arc;

use application::{ApplicationError, GeolocationProvider, LocationState, NoticePort};
use infrastructure::{AppConfig, GeocodingAdapter, RoutingAdapter, position_source_from_config};
use tracing::info;

/// Create a `LocationState` backed by the configured services
pub fn build_state(
    config: &AppConfig,
    notices: Arc<dyn NoticePort>,
) -> Result<LocationState, ApplicationError> {
    let geocoder = GeocodingAdapter::from_config(&config.geocoding)?;
    let router = RoutingAdapter::from_config(&config.routing)?;

    let geolocation = GeolocationProvider::new(position_source_from_config(&config.geolocation))
        .with_options(config.geolocation.position_options())
        .with_policy(config.geolocation.retry_policy());

    let plan = config.defaults.to_trip_plan()?;

    info!(
        geocoding = %config.geocoding.base_url,
        routing = %config.routing.base_url,
        profile = %config.routing.profile,
        fixed_position = config.geolocation.fixed_position.is_some(),
        "Route planner initialized"
    );

    Ok(LocationState::new(
        plan,
        Arc::new(geocoder),
        Arc::new(router),
        geolocation,
        notices,
    ))
}
