//! Enemy spawner: paces waves by level.

use arena_core::constants::*;

use crate::context::SimContext;
use crate::world_setup;

/// Ticks between waves at `level`.
pub fn spawn_rate(level: u32) -> u32 {
    SPAWN_RATE_BASE
        .saturating_sub(level.saturating_mul(SPAWN_RATE_PER_LEVEL))
        .max(SPAWN_RATE_MIN)
}

/// Enemies per wave at `level`.
pub fn spawn_count(level: u32) -> u32 {
    (1 + level / SPAWN_COUNT_LEVEL_STEP).min(SPAWN_COUNT_MAX)
}

/// Count one tick, or spawn a wave and reset once the timer has reached the rate.
/// Returns the number of enemies spawned.
pub fn run(ctx: &mut SimContext) -> u32 {
    let level = ctx.session.level;
    if ctx.session.spawn_timer < spawn_rate(level) {
        ctx.session.spawn_timer += 1;
        return 0;
    }

    let count = spawn_count(level);
    for _ in 0..count {
        world_setup::spawn_random_enemy(ctx);
    }
    ctx.session.spawn_timer = 0;
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_rate_floors_at_minimum() {
        assert_eq!(spawn_rate(1), 55);
        assert_eq!(spawn_rate(8), 20);
        assert_eq!(spawn_rate(9), 20);
        assert_eq!(spawn_rate(1000), SPAWN_RATE_MIN);
    }

    #[test]
    fn test_spawn_count_caps_at_three() {
        assert_eq!(spawn_count(1), 1);
        assert_eq!(spawn_count(3), 2);
        assert_eq!(spawn_count(6), 3);
        assert_eq!(spawn_count(30), 3);
    }
}
