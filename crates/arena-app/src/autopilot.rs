//! Scripted input source standing in for a human at the keyboard.

use arena_core::commands::{FrameInput, MoveIntent, PlayerCommand};
use arena_core::enums::GamePhase;
use arena_core::state::{EnemyView, GameStateSnapshot};
use arena_core::types::Vec2;

use crate::config::AutopilotConfig;

/// Enemies inside this ground distance count toward the special-attack crowd.
const CROWD_RADIUS: f32 = 10.0;

/// Enemies inside this ground distance make the pilot back away.
const EVADE_RADIUS: f32 = 8.0;

/// Axis component needed before a key is held.
const KEY_THRESHOLD: f32 = 0.3;

/// Input and triggers for one frame.
#[derive(Debug, Clone, Default)]
pub struct PilotDecision {
    pub input: FrameInput,
    pub commands: Vec<PlayerCommand>,
}

#[derive(Debug)]
pub struct Autopilot {
    config: AutopilotConfig,
    sessions_started: u32,
    frames_since_shot: u32,
}

impl Autopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self {
            config,
            sessions_started: 0,
            frames_since_shot: 0,
        }
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// True once the last session has ended and no restart will follow.
    pub fn finished(&self, snapshot: &GameStateSnapshot) -> bool {
        snapshot.phase == GamePhase::GameOver && !self.may_start(snapshot.phase)
    }

    /// Decide this frame's input from the previous frame's snapshot.
    pub fn decide(&mut self, last: Option<&GameStateSnapshot>) -> PilotDecision {
        let phase = last.map_or(GamePhase::NotStarted, |s| s.phase);
        match last {
            Some(snapshot) if phase == GamePhase::Playing => self.play(snapshot),
            _ => self.wait(phase),
        }
    }

    fn may_start(&self, phase: GamePhase) -> bool {
        let allowed = match phase {
            GamePhase::NotStarted => true,
            GamePhase::GameOver => self.config.restart_on_game_over,
            GamePhase::Playing => false,
        };
        allowed && self.sessions_started < self.config.max_sessions
    }

    fn wait(&mut self, phase: GamePhase) -> PilotDecision {
        let mut decision = PilotDecision::default();
        if self.may_start(phase) {
            self.sessions_started += 1;
            self.frames_since_shot = 0;
            decision.commands.push(PlayerCommand::StartSession);
        }
        decision
    }

    fn play(&mut self, snapshot: &GameStateSnapshot) -> PilotDecision {
        let me = Vec2::new(snapshot.player.position.x, snapshot.player.position.z);
        let nearest = nearest_enemy(&snapshot.enemies, me);

        let target = nearest.map_or(me + Vec2::new(0.0, -10.0), |(pos, _)| pos);
        let intent = match nearest {
            Some((pos, distance)) if distance < EVADE_RADIUS => keys_toward(me - pos),
            _ => MoveIntent::default(),
        };

        let mut commands = Vec::new();
        self.frames_since_shot += 1;
        if nearest.is_some() && self.frames_since_shot >= self.config.fire_interval {
            self.frames_since_shot = 0;
            commands.push(PlayerCommand::Fire);
        }

        let crowd = snapshot
            .enemies
            .iter()
            .filter(|e| ground(e).distance(me) < CROWD_RADIUS)
            .count();
        if snapshot.special_cooldown == 0 && crowd >= self.config.special_crowd.max(1) {
            commands.push(PlayerCommand::SpecialFire);
        }

        PilotDecision {
            input: FrameInput::new(intent, target),
            commands,
        }
    }
}

fn ground(enemy: &EnemyView) -> Vec2 {
    Vec2::new(enemy.position.x, enemy.position.z)
}

/// Closest enemy on the playfield; ties go to the earlier one in pool order.
fn nearest_enemy(enemies: &[EnemyView], from: Vec2) -> Option<(Vec2, f32)> {
    enemies
        .iter()
        .map(|e| (ground(e), ground(e).distance(from)))
        .fold(None, |best, candidate| match best {
            Some((_, d)) if d <= candidate.1 => best,
            _ => Some(candidate),
        })
}

/// Movement keys approximating a direction on the playfield (y = world z).
fn keys_toward(direction: Vec2) -> MoveIntent {
    let dir = direction.normalize_or_zero();
    MoveIntent {
        forward: dir.y < -KEY_THRESHOLD,
        back: dir.y > KEY_THRESHOLD,
        left: dir.x < -KEY_THRESHOLD,
        right: dir.x > KEY_THRESHOLD,
    }
}
