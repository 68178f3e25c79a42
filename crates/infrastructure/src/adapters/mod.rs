//! Adapters implementing application ports

mod geocoding_adapter;
mod position_source;
mod routing_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use position_source::{FixedPositionSource, UnsupportedPositionSource, position_source_from_config};
pub use routing_adapter::RoutingAdapter;
