//! Simulation engine for the arena shooter.
//!
//! Owns the hecs ECS world, runs systems once per frame in a fixed order,
//! and produces GameStateSnapshots for the driver.

pub mod context;
pub mod engine;
pub mod session;
pub mod systems;
pub mod visuals;
pub mod world_setup;

pub use arena_core as core;
pub use engine::{SimConfig, SimulationEngine};
