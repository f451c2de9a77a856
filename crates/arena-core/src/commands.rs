//! Player commands and per-frame input sent from the driver to the simulation.
//!
//! Commands are discrete triggers queued for processing at the next tick
//! boundary. `FrameInput` carries the held state sampled once per frame.

use serde::{Deserialize, Serialize};

use crate::types::{Vec2, Vec3};

/// All discrete player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a session (from the title or game-over screen).
    StartSession,
    /// Fire one bullet toward the current aim target.
    Fire,
    /// Fire the radial special attack if its cooldown has elapsed.
    SpecialFire,
}

/// Held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Toward -z.
    pub forward: bool,
    /// Toward +z.
    pub back: bool,
    /// Toward -x.
    pub left: bool,
    /// Toward +x.
    pub right: bool,
}

impl MoveIntent {
    /// Unit direction on the xz plane, or zero when no key (or only opposing keys) is held.
    pub fn direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.back {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }

    pub fn is_idle(&self) -> bool {
        self.direction() == Vec3::ZERO
    }
}

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub intent: MoveIntent,
    /// Aim point on the playfield: x maps to world x, y maps to world z.
    pub target: Vec2,
}

impl FrameInput {
    pub fn new(intent: MoveIntent, target: Vec2) -> Self {
        Self { intent, target }
    }

    /// No movement, aiming at `target`.
    pub fn aim(target: Vec2) -> Self {
        Self {
            intent: MoveIntent::default(),
            target,
        }
    }
}
