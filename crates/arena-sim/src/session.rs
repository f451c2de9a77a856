//! Session state machine: phase, score, level, health, and the pacing counters.
//!
//! Stored in the simulation context, NOT as ECS entities.

use arena_core::constants::*;
use arena_core::enums::{GamePhase, HealthBand};
use arena_core::events::UiEvent;
use arena_core::state::SessionStats;

/// Mutable per-session game state.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    /// Can go negative internally; display values clamp at 0.
    pub health: i32,
    pub level_up_score: u32,
    pub spawn_timer: u32,
    pub special_cooldown: u32,
    pub final_score: Option<u32>,
    pub stats: SessionStats,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: GamePhase::NotStarted,
            score: 0,
            level: STARTING_LEVEL,
            health: PLAYER_MAX_HEALTH,
            level_up_score: FIRST_LEVEL_UP_SCORE,
            spawn_timer: 0,
            special_cooldown: 0,
            final_score: None,
            stats: SessionStats::default(),
        }
    }
}

impl SessionState {
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Health as shown to the player.
    pub fn display_health(&self) -> u32 {
        self.health.clamp(0, PLAYER_MAX_HEALTH) as u32
    }

    pub fn health_band(&self) -> HealthBand {
        HealthBand::for_health(self.health)
    }

    /// Enter `Playing` with fresh values. Returns false (and changes nothing)
    /// if a session is already running.
    pub fn start(&mut self, ui_events: &mut Vec<UiEvent>) -> bool {
        if self.is_playing() {
            return false;
        }
        *self = Self {
            phase: GamePhase::Playing,
            ..Self::default()
        };
        ui_events.push(UiEvent::SessionStarted);
        ui_events.push(UiEvent::ScoreChanged { score: self.score });
        ui_events.push(UiEvent::LevelChanged { level: self.level });
        ui_events.push(self.health_event());
        log::info!("Session started");
        true
    }

    /// Add points for a kill and level up once the threshold is crossed.
    /// Returns true if the level changed.
    pub fn award_points(&mut self, points: u32, ui_events: &mut Vec<UiEvent>) -> bool {
        self.score = self.score.saturating_add(points);
        ui_events.push(UiEvent::ScoreChanged { score: self.score });

        if self.score < self.level_up_score {
            return false;
        }
        self.level += 1;
        self.level_up_score += LEVEL_UP_SCORE_STEP * self.level;
        ui_events.push(UiEvent::LevelChanged { level: self.level });
        log::info!(
            "Level {} reached at score {} (next at {})",
            self.level,
            self.score,
            self.level_up_score
        );
        true
    }

    /// Apply contact damage. Returns true only for the hit that ends the session.
    pub fn take_damage(&mut self, amount: i32, ui_events: &mut Vec<UiEvent>) -> bool {
        self.health -= amount;
        self.stats.damage_taken += amount.max(0) as u32;
        ui_events.push(self.health_event());

        if self.health > 0 || !self.is_playing() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.final_score = Some(self.score);
        ui_events.push(UiEvent::SessionEnded {
            final_score: self.score,
        });
        log::info!(
            "Game over at level {} with score {} ({} kills)",
            self.level,
            self.score,
            self.stats.enemies_killed
        );
        true
    }

    fn health_event(&self) -> UiEvent {
        UiEvent::HealthChanged {
            health: self.display_health(),
            band: self.health_band(),
        }
    }
}
