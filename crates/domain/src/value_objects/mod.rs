//! Value Objects - Immutable, identity-less domain primitives

mod clicked_point;
mod coordinate;
mod endpoint;
mod locating_status;
mod named_location;
mod request_token;
mod route_metrics;

pub use clicked_point::{CLICK_PRECISION, ClickedPoint};
pub use coordinate::{Coordinate, round_to};
pub use endpoint::Endpoint;
pub use locating_status::LocatingStatus;
pub use named_location::{CURRENT_LOCATION_LABEL, NamedLocation};
pub use request_token::RequestToken;
pub use route_metrics::RouteMetrics;
