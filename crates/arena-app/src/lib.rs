//! Arena shooter driver.
//!
//! Wires the simulation to a fixed-rate game loop, a headless presenter
//! standing in for the renderer and HUD, and a scripted autopilot.

pub mod autopilot;
pub mod config;
pub mod control;
pub mod game_loop;
pub mod presenter;
pub mod state;

pub use arena_core as core;
