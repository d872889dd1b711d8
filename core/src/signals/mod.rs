//! World signals delivered by the host
//!
//! The host emits signals in frame order: entity add/remove notifications
//! first, then `Tick`, then it renders. Handlers run to completion on the
//! host's thread.

use crate::world::{EntityId, EntityProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldSignal {
    // Entity lifecycle
    EntityAdded { entity_id: EntityId },
    EntityRemoved { entity_id: EntityId },

    // Area transitions
    AreaChanged { area_name: String },

    // Once per update cycle, before rendering
    Tick,
}

/// Receives world signals along with read access to the host world
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &WorldSignal, world: &dyn EntityProvider);
}

/// Deliver a batch of signals, in order, to one handler
pub fn dispatch_all<'a>(
    handler: &mut dyn SignalHandler,
    signals: impl IntoIterator<Item = &'a WorldSignal>,
    world: &dyn EntityProvider,
) {
    for signal in signals {
        handler.handle_signal(signal, world);
    }
}
