//! Player controller: smoothed movement, arena bounds, and facing.

use arena_core::commands::MoveIntent;
use arena_core::components::PlayerShip;
use arena_core::constants::*;
use arena_core::types::{Position, Vec2, Vec3, Velocity};

use crate::context::SimContext;

/// Advance the player one tick toward `intent`, facing the current aim point.
pub fn run(ctx: &mut SimContext, intent: &MoveIntent) {
    let aim = ctx.aim;
    let Ok((pos, vel, ship)) = ctx
        .world
        .query_one_mut::<(&mut Position, &mut Velocity, &mut PlayerShip)>(ctx.player)
    else {
        return;
    };

    let direction = intent.direction();
    if direction == Vec3::ZERO {
        vel.0 *= PLAYER_FRICTION;
    } else {
        vel.0 = vel.0.lerp(direction * ship.speed, PLAYER_ACCEL_SMOOTHING);
    }

    pos.0 += vel.0;
    pos.0.x = pos.0.x.clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
    pos.0.z = pos.0.z.clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);

    ship.facing = facing_toward(pos.ground(), aim);
}

/// Yaw that points the ship's nose from `from` at `target` (both on the playfield).
pub fn facing_toward(from: Vec2, target: Vec2) -> f32 {
    let delta = target - from;
    delta.y.atan2(delta.x) + PLAYER_FACING_OFFSET
}
