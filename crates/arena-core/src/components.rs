//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems, not components.
//! `Position` and `Velocity` (from `types`) are attached as components too.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::VisualHandle;

/// Links a logical entity to the visual that mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    pub handle: VisualHandle,
    pub kind: VisualKind,
}

/// Creation sequence number. Iterating a pool sorted by this gives pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Remaining ticks before the entity expires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining: u32,
    pub initial: u32,
}

impl Lifetime {
    pub fn new(ticks: u32) -> Self {
        Self {
            remaining: ticks,
            initial: ticks,
        }
    }

    /// Fraction of life left, 1.0 when fresh and 0.0 when expired.
    pub fn fraction(&self) -> f32 {
        if self.initial == 0 {
            return 0.0;
        }
        self.remaining as f32 / self.initial as f32
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

/// The player's ship. Exactly one per engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Yaw in radians, already offset so the model's nose faces the target.
    pub facing: f32,
    pub speed: f32,
}

/// Hostile that homes in on the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub tier: EnemyTier,
    pub health: u32,
    pub max_health: u32,
    /// Base speed before the level multiplier.
    pub speed: f32,
    pub points: u32,
    pub size: f32,
}

/// Cosmetic tumble applied to enemies each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    /// Rotation about x and y (both advance by `speed`).
    pub rotation: f32,
    pub speed: f32,
}

/// A projectile fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub damage: u32,
    pub special: bool,
}

/// Visual-feedback particle. Never affects gameplay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub color: Palette,
}
