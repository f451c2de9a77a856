//! Fire actions: single shots, the radial special attack, and its cooldown.

use arena_core::components::PlayerShip;
use arena_core::constants::*;
use arena_core::enums::Palette;
use arena_core::types::{Vec2, Vec3};

use crate::context::SimContext;
use crate::systems::player::facing_toward;
use crate::world_setup;

/// Fire one bullet from the player toward `target`, with a muzzle flash.
pub fn fire(ctx: &mut SimContext, target: Vec2, special: bool) -> hecs::Entity {
    let origin = ctx.player_position().0;
    let aim = Vec3::new(target.x, 0.0, target.y) - origin;
    let direction = match aim.try_normalize() {
        Some(direction) => direction,
        None => facing_direction(ctx),
    };

    let launch = origin + Vec3::Y * BULLET_LAUNCH_HEIGHT;
    let bullet = world_setup::spawn_bullet(ctx, launch, direction, special);

    let flash = if special {
        Palette::Magenta
    } else {
        Palette::Cyan
    };
    world_setup::spawn_burst(ctx, origin, flash, MUZZLE_FLASH_PARTICLES);
    ctx.session.stats.shots_fired += 1;
    bullet
}

/// Fire the radial special attack if it is off cooldown.
/// Returns false and does nothing while the cooldown is running.
pub fn special_attack(ctx: &mut SimContext) -> bool {
    if ctx.session.special_cooldown > 0 {
        return false;
    }

    let center = ctx.player_position().ground();
    let step = std::f32::consts::TAU / SPECIAL_BULLET_COUNT as f32;
    for i in 0..SPECIAL_BULLET_COUNT {
        let angle = step * i as f32;
        let target = center + Vec2::new(angle.cos(), angle.sin()) * SPECIAL_AIM_RADIUS;
        fire(ctx, target, true);
    }

    ctx.session.special_cooldown = SPECIAL_COOLDOWN;
    ctx.session.stats.specials_used += 1;
    log::debug!("Special attack fired");
    true
}

/// Count the special cooldown down by one tick, stopping at zero.
pub fn tick_cooldown(ctx: &mut SimContext) {
    ctx.session.special_cooldown = ctx.session.special_cooldown.saturating_sub(1);
}

/// Unit vector the ship's nose points along, on the playfield.
fn facing_direction(ctx: &SimContext) -> Vec3 {
    let facing = ctx
        .world
        .get::<&PlayerShip>(ctx.player)
        .map(|ship| ship.facing)
        .unwrap_or_else(|_| facing_toward(Vec2::ZERO, Vec2::X));
    let heading = facing - PLAYER_FACING_OFFSET;
    Vec3::new(heading.cos(), 0.0, heading.sin())
}
