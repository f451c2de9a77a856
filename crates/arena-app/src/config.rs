//! Application configuration, loaded from an optional JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use arena_sim::engine::SimConfig;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level driver settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// RNG seed handed to the simulation.
    pub seed: u64,
    /// Frames to run before stopping.
    pub max_ticks: u64,
    /// Sleep to hold 60 Hz instead of running flat out.
    pub realtime: bool,
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,
    pub autopilot: AutopilotConfig,
}

/// Scripted player behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Fire one shot every this many frames.
    pub fire_interval: u32,
    /// Use the special attack when at least this many enemies are close.
    pub special_crowd: usize,
    /// Start a new session after game over.
    pub restart_on_game_over: bool,
    /// Stop starting sessions after this many.
    pub max_sessions: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            max_ticks: 60 * 60,
            realtime: false,
            log_level: "info".into(),
            autopilot: AutopilotConfig::default(),
        }
    }
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            fire_interval: 8,
            special_crowd: 3,
            restart_on_game_over: true,
            max_sessions: 3,
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ticks == 0 {
            return Err(ConfigError::Invalid("max_ticks must be at least 1".into()));
        }
        if self.autopilot.fire_interval == 0 {
            return Err(ConfigError::Invalid(
                "autopilot.fire_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig { seed: self.seed }
    }
}
