//! Bullet flight, expiry, and bullet-vs-enemy hits.

use arena_core::components::{Bullet, Enemy, Lifetime};
use arena_core::constants::*;
use arena_core::enums::Palette;
use arena_core::types::{Position, Velocity};

use crate::context::SimContext;
use crate::systems::cleanup;
use crate::world_setup;

/// Outcome of one bullet striking one enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Damaged,
    Killed { points: u32 },
}

/// Move every bullet, expire the spent ones, and resolve hits.
///
/// A bullet strikes at most one enemy: the first live enemy in pool order
/// inside `HIT_RADIUS`.
pub fn run(ctx: &mut SimContext) {
    for bullet_entity in ctx.pool::<Bullet>() {
        let Ok((bullet, pos, vel, life)) = ctx
            .world
            .query_one_mut::<(&Bullet, &mut Position, &Velocity, &mut Lifetime)>(bullet_entity)
        else {
            continue;
        };

        pos.0 += vel.0;
        life.remaining = life.remaining.saturating_sub(1);
        if life.is_expired() {
            cleanup::destroy(ctx, bullet_entity);
            continue;
        }

        let bullet = *bullet;
        let bullet_pos = *pos;

        let Some(target) = first_enemy_in_range(ctx, &bullet_pos) else {
            continue;
        };

        cleanup::destroy(ctx, bullet_entity);
        resolve_hit(ctx, target, &bullet, &bullet_pos);
    }
}

fn first_enemy_in_range(ctx: &SimContext, at: &Position) -> Option<hecs::Entity> {
    ctx.pool::<Enemy>().into_iter().find(|&enemy| {
        ctx.world
            .get::<&Position>(enemy)
            .map(|pos| pos.distance_to(at) < HIT_RADIUS)
            .unwrap_or(false)
    })
}

/// Apply one bullet's damage to `target`. Kills award points and may level up.
pub fn resolve_hit(
    ctx: &mut SimContext,
    target: hecs::Entity,
    bullet: &Bullet,
    bullet_pos: &Position,
) -> Option<HitOutcome> {
    let (outcome, enemy_pos) = {
        let Ok((enemy, pos)) = ctx.world.query_one_mut::<(&mut Enemy, &Position)>(target) else {
            return None;
        };
        enemy.health = enemy.health.saturating_sub(bullet.damage);
        let outcome = if enemy.health == 0 {
            HitOutcome::Killed {
                points: enemy.points,
            }
        } else {
            HitOutcome::Damaged
        };
        (outcome, pos.0)
    };

    match outcome {
        HitOutcome::Killed { points } => {
            cleanup::destroy(ctx, target);
            ctx.session.stats.enemies_killed += 1;
            ctx.session.award_points(points, &mut ctx.ui_events);
            world_setup::spawn_burst(ctx, enemy_pos, Palette::Green, KILL_PARTICLES);
            log::debug!("Enemy destroyed for {} points", points);
        }
        HitOutcome::Damaged => {
            world_setup::spawn_burst(ctx, bullet_pos.0, Palette::Yellow, HIT_PARTICLES);
        }
    }
    Some(outcome)
}
