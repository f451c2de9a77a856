//! Visual handle bookkeeping.
//!
//! The simulation owns every logical entity. Each one that is drawn gets a
//! `VisualHandle` at creation and gives it back at destruction; the renderer
//! only ever sees the resulting `RenderCommand`s.

use arena_core::components::Visual;
use arena_core::enums::VisualKind;
use arena_core::events::RenderCommand;
use arena_core::types::{Vec3, VisualHandle};

/// Allocates handles and buffers lifecycle requests until the next snapshot.
#[derive(Debug, Default)]
pub struct Visuals {
    next_handle: u64,
    commands: Vec<RenderCommand>,
    live: usize,
}

impl Visuals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh handle and request its visual.
    pub fn attach(&mut self, kind: VisualKind, position: Vec3) -> Visual {
        let handle = VisualHandle(self.next_handle);
        self.next_handle += 1;
        self.live += 1;
        self.commands.push(RenderCommand::Spawn {
            handle,
            kind,
            position,
        });
        Visual { handle, kind }
    }

    /// Request removal of a visual. Callers release each handle once.
    pub fn release(&mut self, handle: VisualHandle) {
        self.live = self.live.saturating_sub(1);
        self.commands.push(RenderCommand::Despawn { handle });
    }

    /// Number of handles attached and not yet released.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Take the buffered commands, oldest first.
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}
