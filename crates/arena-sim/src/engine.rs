//! Simulation engine: the frame step of the game.
//!
//! `SimulationEngine` owns the simulation context, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;

use arena_core::commands::{FrameInput, MoveIntent, PlayerCommand};
use arena_core::enums::GamePhase;
use arena_core::state::GameStateSnapshot;
use arena_core::types::SimTime;

use crate::context::SimContext;
use crate::session::SessionState;
use crate::systems;
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    ctx: SimContext,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        log::debug!("Simulation engine created with seed {}", config.seed);
        Self {
            ctx: SimContext::new(config.seed),
            time: SimTime::default(),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// Outside `Playing` only commands are processed; the world stays frozen.
    pub fn tick(&mut self, input: &FrameInput) -> GameStateSnapshot {
        self.accept_aim(input);
        self.process_commands();

        if self.ctx.session.is_playing() {
            self.run_systems(&input.intent);
            self.time.advance();
        }

        systems::snapshot::build_snapshot(&mut self.ctx, &self.time)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.ctx.session.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the session state (score, level, health, counters).
    pub fn session(&self) -> &SessionState {
        &self.ctx.session
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.ctx.world
    }

    /// Mutable context access for tests that stage exact situations.
    #[cfg(test)]
    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    #[cfg(test)]
    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    /// Keep the last finite aim point; a malformed one is dropped for this frame.
    fn accept_aim(&mut self, input: &FrameInput) {
        if input.target.is_finite() {
            self.ctx.aim = input.target;
        } else {
            log::warn!(
                "Ignoring non-finite aim target {:?} at tick {}",
                input.target,
                self.time.tick
            );
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => self.start_session(),
            PlayerCommand::Fire => {
                if self.ctx.session.is_playing() {
                    let aim = self.ctx.aim;
                    systems::weapons::fire(&mut self.ctx, aim, false);
                }
            }
            PlayerCommand::SpecialFire => {
                if self.ctx.session.is_playing() {
                    systems::weapons::special_attack(&mut self.ctx);
                }
            }
        }
    }

    /// NotStarted/GameOver -> Playing. Ignored while a session is running.
    fn start_session(&mut self) {
        if !self.ctx.session.start(&mut self.ctx.ui_events) {
            log::debug!("StartSession ignored: session already running");
            return;
        }
        systems::cleanup::clear_pools(&mut self.ctx);
        world_setup::reset_player(&mut self.ctx);
        self.time = SimTime::default();
    }

    /// Run all systems in frame order.
    fn run_systems(&mut self, intent: &MoveIntent) {
        // 1. Player movement and facing
        systems::player::run(&mut self.ctx, intent);
        // 2. Enemy homing and contact damage
        systems::enemy_ai::run(&mut self.ctx);
        // Game over freezes the rest of the frame
        if !self.ctx.session.is_playing() {
            return;
        }
        // 3. Bullet flight, expiry, hits and scoring
        systems::projectiles::run(&mut self.ctx);
        // 4. Particle decay
        systems::particles::run(&mut self.ctx);
        // 5. Enemy waves
        systems::spawner::run(&mut self.ctx);
        // 6. Special attack cooldown
        systems::weapons::tick_cooldown(&mut self.ctx);
    }
}
