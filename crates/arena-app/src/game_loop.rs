//! Game loop: runs the simulation engine at 60 Hz and publishes snapshots.
//!
//! The engine is created inside the loop thread so the thread owns it outright.
//! Commands and held input arrive via an `mpsc` channel; the latest snapshot
//! is stored in shared state for polling. `run_headless` drives the same
//! engine from the autopilot without a thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use arena_core::commands::FrameInput;
use arena_core::constants::TICK_RATE;
use arena_core::state::GameStateSnapshot;
use arena_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use crate::presenter::{Presenter, PresenterError};
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Game loop failures.
#[derive(thiserror::Error, Debug)]
pub enum LoopError {
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("game loop is not running")]
    NotRunning,

    #[error("game loop is already running")]
    AlreadyRunning,

    #[error("game loop channel closed")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,

    #[error("game loop thread panicked")]
    Panicked,

    #[error(transparent)]
    Presenter(#[from] PresenterError),
}

/// Outcome of a headless run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks: u64,
    pub sessions: u32,
    pub best_score: u32,
    pub last_final_score: Option<u32>,
    pub final_snapshot: GameStateSnapshot,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), LoopError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut input = FrameInput::default();
    let mut next_tick_time = Instant::now();
    log::info!("Game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(frame_input)) => input = frame_input,
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("Game loop stopped at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame (the engine gates on session phase itself)
        let snapshot = engine.tick(&input);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time = pace(next_tick_time);
    }
}

/// Sleep until `next + TICK_DURATION`, resetting if far behind.
fn pace(next: Instant) -> Instant {
    let next = next + TICK_DURATION;
    let now = Instant::now();
    if next > now {
        std::thread::sleep(next - now);
        next
    } else if now - next > TICK_DURATION * 2 {
        // Too far behind: reset to avoid a catch-up spiral
        now
    } else {
        next
    }
}

/// Run the engine on this thread, driven by the autopilot, until
/// `max_ticks` or until the autopilot has no sessions left.
pub fn run_headless(config: &AppConfig) -> Result<RunSummary, LoopError> {
    let mut engine = SimulationEngine::new(config.sim_config());
    let mut pilot = Autopilot::new(config.autopilot.clone());
    let mut presenter = Presenter::new();
    let mut last: Option<GameStateSnapshot> = None;
    let mut next_tick_time = Instant::now();
    let mut ticks = 0;

    while ticks < config.max_ticks {
        let decision = pilot.decide(last.as_ref());
        engine.queue_commands(decision.commands);
        let snapshot = engine.tick(&decision.input);
        presenter.present(&snapshot)?;
        ticks += 1;

        let done = pilot.finished(&snapshot);
        last = Some(snapshot);
        if done {
            break;
        }
        if config.realtime {
            next_tick_time = pace(next_tick_time);
        }
    }

    let hud = presenter.hud();
    log::info!(
        "Run finished after {} frames: {} sessions, best score {}",
        ticks,
        hud.sessions_started,
        hud.best_score
    );
    Ok(RunSummary {
        ticks,
        sessions: hud.sessions_started,
        best_score: hud.best_score,
        last_final_score: hud.last_final_score,
        final_snapshot: last.unwrap_or_default(),
    })
}
