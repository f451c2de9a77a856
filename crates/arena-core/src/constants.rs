//! Simulation constants and tuning parameters.
//!
//! Every rate and duration is expressed per tick; the game runs one tick per
//! displayed frame.

use crate::enums::Palette;
use crate::types::TierStats;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Player position is clamped to [-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT] on x and z.
pub const ARENA_HALF_EXTENT: f32 = 40.0;

// --- Player ---

/// Top speed of the player ship (units per tick).
pub const PLAYER_SPEED: f32 = 0.3;

/// Lerp factor pulling velocity toward the intended velocity each tick.
pub const PLAYER_ACCEL_SMOOTHING: f32 = 0.2;

/// Velocity multiplier applied each tick without movement input.
pub const PLAYER_FRICTION: f32 = 0.9;

/// Added to the aim angle so a forward-pointing model faces the target.
pub const PLAYER_FACING_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

/// Health at session start.
pub const PLAYER_MAX_HEALTH: i32 = 100;

// --- Session ---

pub const STARTING_LEVEL: u32 = 1;

/// Score needed for the first level-up.
pub const FIRST_LEVEL_UP_SCORE: u32 = 1000;

/// Threshold growth per level: next += LEVEL_UP_SCORE_STEP * new_level.
pub const LEVEL_UP_SCORE_STEP: u32 = 1000;

// --- Enemies ---

/// Tier table, weakest first. Higher tiers unlock every two levels.
pub const ENEMY_TIERS: [TierStats; 3] = [
    TierStats {
        color: Palette::Rose,
        size: 1.0,
        health: 1,
        speed: 0.08,
        points: 100,
    },
    TierStats {
        color: Palette::Amber,
        size: 1.5,
        health: 2,
        speed: 0.06,
        points: 200,
    },
    TierStats {
        color: Palette::Magenta,
        size: 2.0,
        health: 3,
        speed: 0.04,
        points: 300,
    },
];

/// Enemy speed multiplier per level: speed * (1 + level * ENEMY_SPEED_PER_LEVEL).
pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.1;

/// Spin speed range (radians per tick): SPIN_MIN + u * SPIN_RANGE.
pub const ENEMY_SPIN_MIN: f32 = 0.02;
pub const ENEMY_SPIN_RANGE: f32 = 0.05;

/// Enemy touching the player inside this distance deals contact damage.
pub const CONTACT_RADIUS: f32 = 2.0;

/// Damage dealt to the player by one enemy contact.
pub const CONTACT_DAMAGE: i32 = 10;

// --- Spawner ---

/// Spawn interval at level 0; shrinks by SPAWN_RATE_PER_LEVEL each level.
pub const SPAWN_RATE_BASE: u32 = 60;
pub const SPAWN_RATE_PER_LEVEL: u32 = 5;

/// Spawn interval never drops below this (ticks).
pub const SPAWN_RATE_MIN: u32 = 20;

/// One extra enemy per wave every SPAWN_COUNT_LEVEL_STEP levels.
pub const SPAWN_COUNT_LEVEL_STEP: u32 = 3;

/// Upper bound on enemies spawned per wave.
pub const SPAWN_COUNT_MAX: u32 = 3;

/// Spawn ring radius range [min, max).
pub const SPAWN_RING_MIN: f32 = 30.0;
pub const SPAWN_RING_MAX: f32 = 40.0;

// --- Bullets ---

pub const BULLET_SPEED: f32 = 0.8;
pub const SPECIAL_BULLET_SPEED: f32 = 1.2;
pub const BULLET_DAMAGE: u32 = 1;
pub const SPECIAL_BULLET_DAMAGE: u32 = 3;

/// Bullet lifetime in ticks.
pub const BULLET_LIFETIME: u32 = 100;

/// Bullets launch this far above the player's ground position.
pub const BULLET_LAUNCH_HEIGHT: f32 = 1.0;

/// A bullet inside this distance of an enemy hits it.
pub const HIT_RADIUS: f32 = 1.5;

// --- Special attack ---

pub const SPECIAL_BULLET_COUNT: u32 = 8;

/// Distance from the player of each special bullet's aim point.
pub const SPECIAL_AIM_RADIUS: f32 = 5.0;

/// Cooldown after a special attack (3 seconds).
pub const SPECIAL_COOLDOWN: u32 = 180;

// --- Particles ---

/// Particle lifetime in ticks; opacity = remaining / PARTICLE_LIFETIME.
pub const PARTICLE_LIFETIME: u32 = 30;

/// Horizontal burst velocity range is [-SPREAD/2, SPREAD/2).
pub const PARTICLE_SPREAD: f32 = 0.3;

/// Vertical burst velocity range is [0, RISE).
pub const PARTICLE_RISE: f32 = 0.3;

/// Velocity multiplier per tick.
pub const PARTICLE_DRAG: f32 = 0.95;

pub const MUZZLE_FLASH_PARTICLES: u32 = 10;
pub const PLAYER_HIT_PARTICLES: u32 = 20;
pub const KILL_PARTICLES: u32 = 30;
pub const HIT_PARTICLES: u32 = 10;

// --- Health display bands ---

/// Health above this is shown as healthy.
pub const HEALTH_BAND_HEALTHY_ABOVE: i32 = 60;

/// Health at or above this (and not healthy) is shown as wounded.
pub const HEALTH_BAND_WOUNDED_FROM: i32 = 30;
