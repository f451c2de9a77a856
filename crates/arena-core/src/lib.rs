//! Core types and definitions for the arena shooter simulation.
//!
//! This crate defines the vocabulary shared by the simulation and its driver:
//! components, commands, frame input, snapshots, events, and tuning constants.
//! It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
