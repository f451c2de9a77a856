//! Enemy AI: home in on the player and resolve contact damage.

use arena_core::components::{Enemy, Spin};
use arena_core::constants::*;
use arena_core::enums::Palette;
use arena_core::types::Position;

use crate::context::SimContext;
use crate::systems::cleanup;
use crate::world_setup;

/// Speed multiplier applied to every enemy at `level`.
pub fn level_speed_factor(level: u32) -> f32 {
    1.0 + level as f32 * ENEMY_SPEED_PER_LEVEL
}

/// Move every enemy toward the player. An enemy that ends up within contact
/// range is destroyed and damages the player.
///
/// Contacts later in the same pass still resolve after the session ends; the
/// game-over transition itself happens once.
pub fn run(ctx: &mut SimContext) {
    let player_pos = ctx.player_position();
    let factor = level_speed_factor(ctx.session.level);

    for entity in ctx.pool::<Enemy>() {
        let Ok((enemy, spin, pos)) = ctx
            .world
            .query_one_mut::<(&Enemy, &mut Spin, &mut Position)>(entity)
        else {
            continue;
        };

        let direction = (player_pos.0 - pos.0).normalize_or_zero();
        pos.0 += direction * enemy.speed * factor;
        spin.rotation += spin.speed;

        if pos.distance_to(&player_pos) >= CONTACT_RADIUS {
            continue;
        }

        let contact_at = pos.0;
        let tier = enemy.tier;
        cleanup::destroy(ctx, entity);
        world_setup::spawn_burst(ctx, contact_at, Palette::Red, PLAYER_HIT_PARTICLES);
        log::debug!("{:?} rammed the player", tier);
        ctx.session.take_damage(CONTACT_DAMAGE, &mut ctx.ui_events);
    }
}
