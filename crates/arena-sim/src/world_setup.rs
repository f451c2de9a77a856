//! Entity spawn factories.
//!
//! Each factory creates the logical entity and its visual together, so the
//! renderer hears about an entity in the same frame it starts to exist.

use hecs::{Entity, World};
use rand::Rng;

use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::*;
use arena_core::types::{Position, Vec3, Velocity};

use crate::context::SimContext;
use crate::visuals::Visuals;

/// Spawn the player's ship at the origin. Called once per engine.
pub fn spawn_player(world: &mut World, visuals: &mut Visuals) -> Entity {
    let position = Position::default();
    let visual = visuals.attach(VisualKind::Player, position.0);
    world.spawn((
        PlayerShip {
            facing: 0.0,
            speed: PLAYER_SPEED,
        },
        position,
        Velocity::default(),
        visual,
    ))
}

/// Put the player back at the origin, at rest.
pub fn reset_player(ctx: &mut SimContext) {
    if let Ok((pos, vel, ship)) = ctx
        .world
        .query_one_mut::<(&mut Position, &mut Velocity, &mut PlayerShip)>(ctx.player)
    {
        *pos = Position::default();
        *vel = Velocity::default();
        ship.facing = 0.0;
    }
}

/// Spawn one enemy of `tier` at `position`.
pub fn spawn_enemy(ctx: &mut SimContext, tier: EnemyTier, position: Position) -> Entity {
    let stats = tier.stats();
    let spin_speed = ctx.rng.gen::<f32>() * ENEMY_SPIN_RANGE + ENEMY_SPIN_MIN;
    let visual = ctx.visuals.attach(VisualKind::Enemy { tier }, position.0);
    let order = ctx.next_order();
    ctx.session.stats.enemies_spawned += 1;
    log::debug!("Spawned {:?} at {:?}", tier, position.0);
    ctx.world.spawn((
        Enemy {
            tier,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            points: stats.points,
            size: stats.size,
        },
        Spin {
            rotation: 0.0,
            speed: spin_speed,
        },
        position,
        visual,
        order,
    ))
}

/// Spawn an enemy of a level-gated random tier on the spawn ring.
pub fn spawn_random_enemy(ctx: &mut SimContext) -> Entity {
    let tier = EnemyTier::from_draw(ctx.session.level, ctx.rng.gen::<f32>());
    let angle = ctx.rng.gen_range(0.0..std::f32::consts::TAU);
    let distance = ctx.rng.gen_range(SPAWN_RING_MIN..SPAWN_RING_MAX);
    let position = Position::new(
        angle.cos() * distance,
        tier.stats().size,
        angle.sin() * distance,
    );
    spawn_enemy(ctx, tier, position)
}

/// Spawn a bullet at `origin` travelling along the unit vector `direction`.
pub fn spawn_bullet(ctx: &mut SimContext, origin: Vec3, direction: Vec3, special: bool) -> Entity {
    let (speed, damage) = if special {
        (SPECIAL_BULLET_SPEED, SPECIAL_BULLET_DAMAGE)
    } else {
        (BULLET_SPEED, BULLET_DAMAGE)
    };
    let visual = ctx.visuals.attach(VisualKind::Bullet { special }, origin);
    let order = ctx.next_order();
    ctx.world.spawn((
        Bullet { damage, special },
        Position(origin),
        Velocity(direction * speed),
        Lifetime::new(BULLET_LIFETIME),
        visual,
        order,
    ))
}

/// Spawn `count` particles at `position` with randomized outward velocity.
pub fn spawn_burst(ctx: &mut SimContext, position: Vec3, color: Palette, count: u32) {
    let half_spread = PARTICLE_SPREAD / 2.0;
    for _ in 0..count {
        let velocity = Vec3::new(
            ctx.rng.gen_range(-half_spread..half_spread),
            ctx.rng.gen_range(0.0..PARTICLE_RISE),
            ctx.rng.gen_range(-half_spread..half_spread),
        );
        let visual = ctx.visuals.attach(VisualKind::Particle { color }, position);
        let order = ctx.next_order();
        ctx.world.spawn((
            Particle { color },
            Position(position),
            Velocity(velocity),
            Lifetime::new(PARTICLE_LIFETIME),
            visual,
            order,
        ));
    }
}
