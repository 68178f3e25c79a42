//! Application layer - Use cases and orchestration
//!
//! Contains the location coordinator, the geolocation retry policy, notice
//! generation, and the port definitions that infrastructure adapters and
//! presentation surfaces implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
