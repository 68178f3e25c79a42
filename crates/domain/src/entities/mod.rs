//! Domain entities - Objects with identity and lifecycle

mod trip_plan;

pub use trip_plan::{RouteTicket, TripPlan};
