//! Headless presenter: stands in for the renderer and the HUD.
//!
//! Mirrors every visual handle the simulation announces and rejects any
//! request that would break the one-visual-per-entity contract.

use std::collections::HashMap;

use arena_core::enums::{GamePhase, HealthBand, VisualKind};
use arena_core::events::{RenderCommand, UiEvent};
use arena_core::state::GameStateSnapshot;
use arena_core::types::VisualHandle;

/// Visual protocol violations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterError {
    #[error("visual {0:?} spawned while already live")]
    DuplicateHandle(VisualHandle),

    #[error("despawn of unknown visual {0:?}")]
    UnknownHandle(VisualHandle),

    #[error("snapshot references visual {0:?} that was never spawned")]
    UntrackedView(VisualHandle),
}

/// What the HUD currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HudState {
    pub score: u32,
    pub level: u32,
    pub health: u32,
    pub band: HealthBand,
    pub in_session: bool,
    pub sessions_started: u32,
    pub last_final_score: Option<u32>,
    pub best_score: u32,
}

#[derive(Debug, Default)]
pub struct Presenter {
    visuals: HashMap<VisualHandle, VisualKind>,
    hud: HudState,
    frames: u64,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one snapshot: visual lifecycle first, then HUD updates, then a
    /// check that every drawn entity has a live visual.
    pub fn present(&mut self, snapshot: &GameStateSnapshot) -> Result<(), PresenterError> {
        for command in &snapshot.render_commands {
            self.apply_render(command)?;
        }
        for event in &snapshot.ui_events {
            self.apply_ui(event);
        }
        self.check_views(snapshot)?;
        self.frames += 1;
        Ok(())
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    pub fn live_visuals(&self) -> usize {
        self.visuals.len()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn apply_render(&mut self, command: &RenderCommand) -> Result<(), PresenterError> {
        match *command {
            RenderCommand::Spawn { handle, kind, .. } => {
                if self.visuals.insert(handle, kind).is_some() {
                    return Err(PresenterError::DuplicateHandle(handle));
                }
            }
            RenderCommand::Despawn { handle } => {
                if self.visuals.remove(&handle).is_none() {
                    return Err(PresenterError::UnknownHandle(handle));
                }
            }
        }
        Ok(())
    }

    fn apply_ui(&mut self, event: &UiEvent) {
        match *event {
            UiEvent::ScoreChanged { score } => {
                self.hud.score = score;
                self.hud.best_score = self.hud.best_score.max(score);
            }
            UiEvent::LevelChanged { level } => {
                if self.hud.in_session && level > 1 {
                    log::info!("Level {}", level);
                }
                self.hud.level = level;
            }
            UiEvent::HealthChanged { health, band } => {
                if band != self.hud.band && self.hud.in_session {
                    log::debug!("Health band {:?} -> {:?}", self.hud.band, band);
                }
                self.hud.health = health;
                self.hud.band = band;
            }
            UiEvent::SessionStarted => {
                self.hud.in_session = true;
                self.hud.sessions_started += 1;
                log::info!("Session {} started", self.hud.sessions_started);
            }
            UiEvent::SessionEnded { final_score } => {
                self.hud.in_session = false;
                self.hud.last_final_score = Some(final_score);
                log::info!("Game over. Final score: {}", final_score);
            }
        }
    }

    fn check_views(&self, snapshot: &GameStateSnapshot) -> Result<(), PresenterError> {
        let handles = snapshot
            .player
            .handle
            .into_iter()
            .chain(snapshot.enemies.iter().map(|e| e.handle))
            .chain(snapshot.bullets.iter().map(|b| b.handle))
            .chain(snapshot.particles.iter().map(|p| p.handle));
        for handle in handles {
            if !self.visuals.contains_key(&handle) {
                return Err(PresenterError::UntrackedView(handle));
            }
        }
        if snapshot.phase == GamePhase::Playing && !self.hud.in_session {
            log::warn!("Snapshot is playing but no session start was announced");
        }
        Ok(())
    }
}
