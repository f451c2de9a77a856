//! Simulation context: everything a system may read or mutate during a frame.
//!
//! Owned by the engine and passed to each system explicitly.

use hecs::{Component, Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::SpawnOrder;
use arena_core::events::UiEvent;
use arena_core::types::{Position, Vec2};

use crate::session::SessionState;
use crate::visuals::Visuals;
use crate::world_setup;

pub struct SimContext {
    pub world: World,
    pub rng: ChaCha8Rng,
    pub session: SessionState,
    pub visuals: Visuals,
    pub ui_events: Vec<UiEvent>,
    pub despawn_buffer: Vec<Entity>,
    /// The single player entity; lives as long as the engine.
    pub player: Entity,
    /// Last finite aim point received from input.
    pub aim: Vec2,
    next_spawn_order: u64,
}

impl SimContext {
    pub fn new(seed: u64) -> Self {
        let mut world = World::new();
        let mut visuals = Visuals::new();
        let player = world_setup::spawn_player(&mut world, &mut visuals);
        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(seed),
            session: SessionState::default(),
            visuals,
            ui_events: Vec::new(),
            despawn_buffer: Vec::new(),
            player,
            aim: Vec2::ZERO,
            next_spawn_order: 0,
        }
    }

    /// Next creation sequence number.
    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next_spawn_order);
        self.next_spawn_order += 1;
        order
    }

    /// Live entities carrying `T`, in creation order.
    ///
    /// Systems iterate this snapshot and may destroy entities as they go;
    /// an entry that was destroyed earlier in the pass fails `is_alive`.
    pub fn pool<T: Component>(&self) -> Vec<Entity> {
        let mut entries: Vec<(SpawnOrder, Entity)> = self
            .world
            .query::<(&T, &SpawnOrder)>()
            .iter()
            .map(|(entity, (_, order))| (*order, entity))
            .collect();
        entries.sort_unstable_by_key(|(order, _)| *order);
        entries.into_iter().map(|(_, entity)| entity).collect()
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn player_position(&self) -> Position {
        self.world
            .get::<&Position>(self.player)
            .map(|pos| *pos)
            .unwrap_or_default()
    }
}
