//! Cleanup system: destroys entities and keeps their visuals in step.

use hecs::Entity;

use arena_core::components::{Bullet, Enemy, Particle, Visual};

use crate::context::SimContext;

/// Destroy one entity now and release its visual.
///
/// Safe to call on an entity that is already gone: returns false and emits nothing.
pub fn destroy(ctx: &mut SimContext, entity: Entity) -> bool {
    let handle = ctx.world.get::<&Visual>(entity).ok().map(|visual| visual.handle);
    if ctx.world.despawn(entity).is_err() {
        return false;
    }
    if let Some(handle) = handle {
        ctx.visuals.release(handle);
    }
    true
}

/// Empty the enemy, bullet and particle pools. The player is kept.
/// Uses the context's pre-allocated buffer to avoid a per-call allocation.
pub fn clear_pools(ctx: &mut SimContext) {
    let mut buffer = std::mem::take(&mut ctx.despawn_buffer);
    buffer.clear();
    buffer.extend(ctx.pool::<Enemy>());
    buffer.extend(ctx.pool::<Bullet>());
    buffer.extend(ctx.pool::<Particle>());

    let cleared = buffer.len();
    for entity in buffer.drain(..) {
        destroy(ctx, entity);
    }
    ctx.despawn_buffer = buffer;

    if cleared > 0 {
        log::debug!("Cleared {} entities from the pools", cleared);
    }
}
