//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::{Vec2, Vec3};

use crate::enums::Palette;

/// 3D position in arena space.
/// x = East, z = South (screen down), y = Up. The playfield is the xz plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// 3D velocity in arena units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Opaque handle naming the visual that mirrors a logical entity.
///
/// Allocated by the simulation, never reused within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Fixed stats for one enemy tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierStats {
    pub color: Palette,
    /// Visual radius; also the spawn height.
    pub size: f32,
    pub health: u32,
    /// Base approach speed per tick, before the level multiplier.
    pub speed: f32,
    pub points: u32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// The point on the playfield plane (x, z).
    pub fn ground(&self) -> Vec2 {
        Vec2::new(self.0.x, self.0.z)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
