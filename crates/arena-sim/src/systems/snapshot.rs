//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only with respect to the world; drains the per-frame event buffers.

use hecs::Entity;

use arena_core::components::*;
use arena_core::state::*;
use arena_core::types::{Position, SimTime, Velocity};

use crate::context::SimContext;

/// Build a complete GameStateSnapshot from the current context.
pub fn build_snapshot(ctx: &mut SimContext, time: &SimTime) -> GameStateSnapshot {
    let session = &ctx.session;
    let mut snapshot = GameStateSnapshot {
        time: *time,
        phase: session.phase,
        score: session.score,
        level: session.level,
        health: session.display_health(),
        health_band: session.health_band(),
        level_up_score: session.level_up_score,
        spawn_timer: session.spawn_timer,
        special_cooldown: session.special_cooldown,
        final_score: session.final_score,
        player: build_player(ctx),
        enemies: build_enemies(ctx),
        bullets: build_bullets(ctx),
        particles: build_particles(ctx),
        render_commands: Vec::new(),
        ui_events: Vec::new(),
        stats: session.stats,
    };
    snapshot.render_commands = ctx.visuals.drain();
    snapshot.ui_events = std::mem::take(&mut ctx.ui_events);
    snapshot
}

fn build_player(ctx: &SimContext) -> PlayerView {
    let world = &ctx.world;
    let Ok(mut query) = world.query_one::<(&PlayerShip, &Position, &Velocity, &Visual)>(ctx.player)
    else {
        return PlayerView::default();
    };
    query
        .get()
        .map(|(ship, pos, vel, visual)| PlayerView {
            handle: Some(visual.handle),
            position: pos.0,
            velocity: vel.0,
            facing: ship.facing,
        })
        .unwrap_or_default()
}

fn build_enemies(ctx: &SimContext) -> Vec<EnemyView> {
    in_pool_order::<Enemy>(ctx)
        .filter_map(|entity| {
            let mut query = ctx
                .world
                .query_one::<(&Enemy, &Spin, &Position, &Visual)>(entity)
                .ok()?;
            query.get().map(|(enemy, spin, pos, visual)| EnemyView {
                handle: visual.handle,
                tier: enemy.tier,
                position: pos.0,
                rotation: spin.rotation,
                health: enemy.health,
                max_health: enemy.max_health,
            })
        })
        .collect()
}

fn build_bullets(ctx: &SimContext) -> Vec<BulletView> {
    in_pool_order::<Bullet>(ctx)
        .filter_map(|entity| {
            let mut query = ctx
                .world
                .query_one::<(&Bullet, &Position, &Lifetime, &Visual)>(entity)
                .ok()?;
            query.get().map(|(bullet, pos, life, visual)| BulletView {
                handle: visual.handle,
                position: pos.0,
                special: bullet.special,
                lifetime: life.remaining,
            })
        })
        .collect()
}

fn build_particles(ctx: &SimContext) -> Vec<ParticleView> {
    in_pool_order::<Particle>(ctx)
        .filter_map(|entity| {
            let mut query = ctx
                .world
                .query_one::<(&Particle, &Position, &Lifetime, &Visual)>(entity)
                .ok()?;
            query.get().map(|(particle, pos, life, visual)| ParticleView {
                handle: visual.handle,
                position: pos.0,
                color: particle.color,
                opacity: life.fraction(),
            })
        })
        .collect()
}

fn in_pool_order<T: hecs::Component>(ctx: &SimContext) -> impl Iterator<Item = Entity> {
    ctx.pool::<T>().into_iter()
}
