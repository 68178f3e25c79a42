//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod map_renderer_port;
mod notice_port;
mod position_source_port;
mod routing_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use map_renderer_port::MapRendererPort;
#[cfg(test)]
pub use map_renderer_port::MockMapRendererPort;
#[cfg(test)]
pub use notice_port::MockNoticePort;
pub use notice_port::NoticePort;
#[cfg(test)]
pub use position_source_port::MockPositionSourcePort;
pub use position_source_port::{PositionError, PositionOptions, PositionSourcePort};
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
