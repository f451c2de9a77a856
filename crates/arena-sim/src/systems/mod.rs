//! ECS systems that operate on the simulation context each tick.
//!
//! Systems are free functions over `&mut SimContext`.
//! They do not own state; it lives in components and the session.

pub mod cleanup;
pub mod enemy_ai;
pub mod particles;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod weapons;
