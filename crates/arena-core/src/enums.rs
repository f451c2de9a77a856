//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::TierStats;

/// Session state (top-level game phase).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first session; nothing simulates.
    #[default]
    NotStarted,
    /// A session is live and every tick runs the full frame.
    Playing,
    /// Player health reached zero; the world is frozen until the next start.
    GameOver,
}

/// Enemy archetype, weakest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    /// Small, fast, one hit.
    #[default]
    Skirmisher,
    /// Mid-size, two hits.
    Bruiser,
    /// Large and slow, three hits.
    Behemoth,
}

impl EnemyTier {
    pub const ALL: [EnemyTier; 3] = [EnemyTier::Skirmisher, EnemyTier::Bruiser, EnemyTier::Behemoth];

    pub fn index(self) -> usize {
        match self {
            EnemyTier::Skirmisher => 0,
            EnemyTier::Bruiser => 1,
            EnemyTier::Behemoth => 2,
        }
    }

    pub fn stats(self) -> TierStats {
        ENEMY_TIERS[self.index()]
    }

    /// Number of tiers available at `level`: ceil(level / 2), saturating at the table size.
    pub fn unlocked_count(level: u32) -> usize {
        let by_level = level.div_ceil(2).max(1) as usize;
        by_level.min(Self::ALL.len())
    }

    /// Map a uniform draw in [0, 1) onto one of the tiers unlocked at `level`.
    pub fn from_draw(level: u32, draw: f32) -> Self {
        let unlocked = Self::unlocked_count(level);
        let index = (draw.clamp(0.0, 1.0) * unlocked as f32) as usize;
        Self::ALL[index.min(unlocked - 1)]
    }
}

/// Color identifiers handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    Rose,
    Amber,
    Magenta,
    Cyan,
    Red,
    Green,
    Yellow,
}

impl Palette {
    /// 24-bit RGB value.
    pub fn hex(self) -> u32 {
        match self {
            Palette::Rose => 0xff0066,
            Palette::Amber => 0xff9900,
            Palette::Magenta => 0xff00ff,
            Palette::Cyan => 0x00ffff,
            Palette::Red => 0xff0000,
            Palette::Green => 0x00ff00,
            Palette::Yellow => 0xffff00,
        }
    }
}

/// What a visual handle should be drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VisualKind {
    Player,
    Enemy { tier: EnemyTier },
    Bullet { special: bool },
    Particle { color: Palette },
}

/// Health bar display tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    /// Above 60.
    #[default]
    Healthy,
    /// 30 to 60 inclusive.
    Wounded,
    /// Below 30.
    Critical,
}

impl HealthBand {
    pub fn for_health(health: i32) -> Self {
        if health > HEALTH_BAND_HEALTHY_ABOVE {
            HealthBand::Healthy
        } else if health >= HEALTH_BAND_WOUNDED_FROM {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }
}
