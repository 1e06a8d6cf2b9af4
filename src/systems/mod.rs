//! Application systems
//!
//! Frame scheduling extracted from main.rs for better organization and testability.

mod simulation;

pub use simulation::{SimulationResult, SimulationSystem, MAX_FRAME_TIME};
