//! Particle decay. Purely cosmetic.

use arena_core::components::{Lifetime, Particle};
use arena_core::constants::PARTICLE_DRAG;
use arena_core::types::{Position, Velocity};

use crate::context::SimContext;
use crate::systems::cleanup;

/// Drift, drag and age every particle; destroy the ones that ran out.
pub fn run(ctx: &mut SimContext) {
    let mut expired = std::mem::take(&mut ctx.despawn_buffer);
    expired.clear();

    for (entity, (_particle, pos, vel, life)) in ctx
        .world
        .query_mut::<(&Particle, &mut Position, &mut Velocity, &mut Lifetime)>()
    {
        pos.0 += vel.0;
        vel.0 *= PARTICLE_DRAG;
        life.remaining = life.remaining.saturating_sub(1);
        if life.is_expired() {
            expired.push(entity);
        }
    }

    for entity in expired.drain(..) {
        cleanup::destroy(ctx, entity);
    }
    ctx.despawn_buffer = expired;
}
