//! Route planner command-line surface
//!
//! The binary in `main.rs` wires these pieces together. They live in a
//! library target so the argument parser and the session loop can be tested
//! from `tests/`.

pub mod cli;
pub mod console;
pub mod route;
pub mod session;
pub mod wiring;
