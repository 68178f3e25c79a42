//! Domain layer for the route planner
//!
//! Contains the coordinate value objects, the trip plan entity with its
//! state transitions, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
