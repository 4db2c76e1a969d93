//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for consumers.

pub mod economy;
pub mod engine;
pub mod systems;
pub mod topology;
pub mod wave_director;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use rampart_core as core;
