//! Control API for a live game loop.
//!
//! These functions bridge a front end (keyboard handler, test harness, CLI)
//! to the game loop thread via the channel in `AppState`.

use arena_core::commands::{FrameInput, PlayerCommand};
use arena_core::state::GameStateSnapshot;
use arena_sim::engine::SimConfig;

use crate::game_loop::{self, LoopError};
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), LoopError> {
    let mut running = state.running.lock().map_err(|_| LoopError::Poisoned)?;
    if *running {
        return Err(LoopError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|_| LoopError::Poisoned)? = Some(cmd_tx);
    *state.worker.lock().map_err(|_| LoopError::Poisoned)? = Some(handle);
    *running = true;
    Ok(())
}

/// Send a discrete player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), LoopError> {
    send(state, GameLoopCommand::Player(command))
}

/// Replace the held input the loop applies each frame.
pub fn send_input(state: &AppState, input: FrameInput) -> Result<(), LoopError> {
    send(state, GameLoopCommand::Input(input))
}

/// Get the latest snapshot (for polling).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, LoopError> {
    let lock = state.latest_snapshot.lock().map_err(|_| LoopError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the loop thread and wait for it to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), LoopError> {
    let mut running = state.running.lock().map_err(|_| LoopError::Poisoned)?;
    if !*running {
        return Err(LoopError::NotRunning);
    }

    if let Some(tx) = state.command_tx.lock().map_err(|_| LoopError::Poisoned)?.take() {
        // A closed channel means the thread already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let worker = state.worker.lock().map_err(|_| LoopError::Poisoned)?.take();
    *running = false;

    match worker {
        Some(handle) => handle.join().map_err(|_| LoopError::Panicked),
        None => Ok(()),
    }
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<(), LoopError> {
    let tx_lock = state.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx.send(message).map_err(|_| LoopError::Disconnected),
        None => Err(LoopError::NotRunning),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use arena_core::enums::GamePhase;

    fn wait_for(state: &AppState, pred: impl Fn(&GameStateSnapshot) -> bool) -> GameStateSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snap) = get_snapshot(state).unwrap() {
                if pred(&snap) {
                    return snap;
                }
            }
            assert!(Instant::now() < deadline, "Timed out waiting for the game loop");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_commands_before_start_are_rejected() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::StartSession),
            Err(LoopError::NotRunning)
        ));
        assert!(matches!(stop_simulation(&state), Err(LoopError::NotRunning)));
    }

    #[test]
    fn test_live_loop_starts_session_and_stops() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default()),
            Err(LoopError::AlreadyRunning)
        ));

        send_command(&state, PlayerCommand::StartSession).unwrap();
        let snap = wait_for(&state, |s| s.phase == GamePhase::Playing && s.time.tick > 2);
        assert_eq!(snap.health, 100);

        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            send_input(&state, FrameInput::default()),
            Err(LoopError::NotRunning)
        ));
    }
}
