//! Events emitted by the simulation for the rendering and UI collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Vec3, VisualHandle};

/// Notifications for the score/health/screen widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    ScoreChanged { score: u32 },
    LevelChanged { level: u32 },
    /// `health` is clamped to 0..=100 for display.
    HealthChanged { health: u32, band: HealthBand },
    SessionStarted,
    SessionEnded { final_score: u32 },
}

/// Visual lifecycle requests. Exactly one `Spawn` and at most one `Despawn` per handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderCommand {
    Spawn {
        handle: VisualHandle,
        kind: VisualKind,
        position: Vec3,
    },
    Despawn {
        handle: VisualHandle,
    },
}

impl RenderCommand {
    pub fn handle(&self) -> VisualHandle {
        match self {
            RenderCommand::Spawn { handle, .. } | RenderCommand::Despawn { handle } => *handle,
        }
    }
}
