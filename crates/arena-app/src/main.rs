use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use arena_app::autopilot::Autopilot;
use arena_app::config::AppConfig;
use arena_app::control;
use arena_app::core::state::GameStateSnapshot;
use arena_app::game_loop::{self, TICK_DURATION};
use arena_app::state::AppState;

/// Run the arena shooter simulation without a window.
#[derive(Parser, Debug)]
#[command(name = "arena", version, about)]
struct Cli {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate (overrides the config file).
    #[arg(long)]
    ticks: Option<u64>,

    /// Hold 60 Hz instead of running as fast as possible.
    #[arg(long)]
    realtime: bool,

    /// Run the threaded game loop and steer it through the control API.
    #[arg(long)]
    live: bool,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(ticks) = cli.ticks {
        config.max_ticks = ticks;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.realtime |= cli.realtime;
    config.validate().context("invalid configuration")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    log::info!("Arena starting with seed {}", config.seed);

    let snapshot = if cli.live {
        run_live(&config)?
    } else {
        let summary = game_loop::run_headless(&config).context("headless run failed")?;
        println!(
            "frames: {}  sessions: {}  best score: {}  last final score: {}",
            summary.ticks,
            summary.sessions,
            summary.best_score,
            summary
                .last_final_score
                .map_or_else(|| "-".to_string(), |s| s.to_string())
        );
        Some(summary.final_snapshot)
    };

    if cli.json {
        if let Some(snapshot) = snapshot {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

/// Drive the threaded loop by polling snapshots and feeding autopilot input.
fn run_live(config: &AppConfig) -> Result<Option<GameStateSnapshot>> {
    let state = AppState::new();
    control::start_simulation(&state, config.sim_config()).context("starting game loop")?;

    let mut pilot = Autopilot::new(config.autopilot.clone());
    let mut last_frame = None;
    let deadline = Instant::now() + TICK_DURATION * (config.max_ticks as u32).saturating_add(60);

    while Instant::now() < deadline {
        let Some(snap) = control::get_snapshot(&state)? else {
            std::thread::sleep(Duration::from_millis(2));
            continue;
        };
        if snap.time.tick >= config.max_ticks || pilot.finished(&snap) {
            break;
        }
        // Only react to fresh frames so triggers are not repeated.
        let frame = (snap.time.tick, snap.phase);
        if last_frame != Some(frame) {
            last_frame = Some(frame);
            let decision = pilot.decide(Some(&snap));
            control::send_input(&state, decision.input)?;
            for command in decision.commands {
                control::send_command(&state, command)?;
            }
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    let snapshot = control::get_snapshot(&state)?;
    control::stop_simulation(&state).context("stopping game loop")?;
    Ok(snapshot)
}
