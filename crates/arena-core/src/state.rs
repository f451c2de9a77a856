//! Game state snapshot: the complete visible state handed to the driver each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{RenderCommand, UiEvent};
use crate::types::{SimTime, Vec3, VisualHandle};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    /// Display health, clamped to 0.
    pub health: u32,
    pub health_band: HealthBand,
    pub level_up_score: u32,
    pub spawn_timer: u32,
    pub special_cooldown: u32,
    /// Set once the session has ended.
    pub final_score: Option<u32>,
    pub player: PlayerView,
    /// In pool (spawn) order.
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub particles: Vec<ParticleView>,
    /// Visual lifecycle requests raised since the previous snapshot, in order.
    pub render_commands: Vec<RenderCommand>,
    /// UI notifications raised since the previous snapshot, in order.
    pub ui_events: Vec<UiEvent>,
    pub stats: SessionStats,
}

/// Player transform.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub handle: Option<VisualHandle>,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Yaw in radians.
    pub facing: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub handle: VisualHandle,
    pub tier: EnemyTier,
    pub position: Vec3,
    /// Tumble angle applied to both x and y rotation.
    pub rotation: f32,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub handle: VisualHandle,
    pub position: Vec3,
    pub special: bool,
    pub lifetime: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub handle: VisualHandle,
    pub position: Vec3,
    pub color: Palette,
    /// 0.0 (gone) to 1.0 (fresh).
    pub opacity: f32,
}

/// Running totals for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub enemies_spawned: u32,
    pub enemies_killed: u32,
    pub shots_fired: u32,
    pub specials_used: u32,
    pub damage_taken: u32,
}
