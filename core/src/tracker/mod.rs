//! Wisp lifecycle tracking
//!
//! `WispTracker` owns the [`SessionState`] of the current area and keeps it
//! in sync with the host world:
//!
//! ```text
//!   EntityAdded ──► classify ──► insert into category / encounters
//!   EntityRemoved ─────────────► drop from removable categories + encounters
//!   Tick ──────────────────────► evict activated wells/altars/converters,
//!                                opened chests
//!   AreaChanged ───────────────► fresh SessionState
//! ```


use wisps_types::Category;

use crate::classify::{Classification, classify};
use crate::signals::{SignalHandler, WorldSignal};
use crate::state::{AreaInfo, SessionState};
use crate::world::{EntityId, EntityProvider};

/// Categories an entity leaves as soon as the host removes it.
///
/// Altars, dust converters, the dealer and chests are not in this list; the
/// first three are evicted by `on_tick`, the dealer only by an area change.
pub const REMOVED_WITH_ENTITY: [Category; 6] = [
    Category::Blue,
    Category::Purple,
    Category::Yellow,
    Category::LightBomb,
    Category::Wells,
    Category::FuelRefill,
];

/// Categories evicted once their state machine reports `activated = 1`
pub const EVICTED_ON_ACTIVATION: [Category; 3] =
    [Category::Wells, Category::Altars, Category::DustConverters];

const ACTIVATED_STATE: &str = "activated";

#[derive(Debug, Default)]
pub struct WispTracker {
    state: SessionState,
    area: AreaInfo,
}

impl WispTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn area(&self) -> &AreaInfo {
        &self.area
    }

    /// Classify a newly reported entity and start tracking it.
    ///
    /// Entities already tracked are left untouched, so duplicate
    /// notifications never produce duplicate markers.
    pub fn on_entity_added(&mut self, id: EntityId, world: &dyn EntityProvider) {
        let Some(metadata) = world.metadata(id) else {
            return;
        };

        match classify(metadata, || world.animated_path(id)) {
            Some(Classification::Track(category)) => {
                if self.state.insert(category, id) {
                    tracing::debug!(entity = %id, %category, "Tracking entity");
                } else {
                    tracing::trace!(entity = %id, %category, "Entity already tracked");
                }
            }
            Some(Classification::Encounter(label)) => {
                tracing::debug!(entity = %id, %label, "Tracking encounter");
                self.state.insert_encounter(id, label);
            }
            None => {}
        }
    }

    /// Stop tracking an entity the host removed from the world.
    pub fn on_entity_removed(&mut self, id: EntityId) {
        for category in REMOVED_WITH_ENTITY {
            if self.state.remove(category, id) {
                tracing::debug!(entity = %id, %category, "Entity left the world");
            }
        }
        if let Some(label) = self.state.remove_encounter(id) {
            tracing::debug!(entity = %id, %label, "Encounter left the world");
        }
    }

    /// Per-frame poll: evict used-up objects and opened chests.
    pub fn on_tick(&mut self, world: &dyn EntityProvider) {
        for category in EVICTED_ON_ACTIVATION {
            if self.state.entities(category).is_empty() {
                continue;
            }
            let evicted = self
                .state
                .evict_where(category, |id| is_activated(world, id));
            if !evicted.is_empty() {
                tracing::debug!(%category, count = evicted.len(), "Evicted activated entities");
            }
        }

        let opened = self
            .state
            .evict_where(Category::Chests, |id| is_opened(world, id));
        if !opened.is_empty() {
            tracing::debug!(count = opened.len(), "Evicted opened chests");
        }
    }

    /// Drop all tracked state and start over for a new area.
    pub fn on_area_change(&mut self, area_name: &str) {
        tracing::info!(
            area = area_name,
            dropped = self.state.total_tracked(),
            "Area changed, resetting tracked entities"
        );
        self.state = SessionState::new();
        self.area = self.area.next(area_name);
    }
}

impl SignalHandler for WispTracker {
    fn handle_signal(&mut self, signal: &WorldSignal, world: &dyn EntityProvider) {
        match signal {
            WorldSignal::EntityAdded { entity_id } => self.on_entity_added(*entity_id, world),
            WorldSignal::EntityRemoved { entity_id } => self.on_entity_removed(*entity_id),
            WorldSignal::AreaChanged { area_name } => self.on_area_change(area_name),
            WorldSignal::Tick => self.on_tick(world),
        }
    }
}

/// State machine reports `activated = 1`. Missing state reads as not activated.
fn is_activated(world: &dyn EntityProvider, id: EntityId) -> bool {
    world.state_flags(id).is_some_and(|flags| {
        flags
            .iter()
            .any(|flag| flag.name == ACTIVATED_STATE && flag.value == 1)
    })
}

/// Chest reports opened, or has no chest component at all
fn is_opened(world: &dyn EntityProvider, id: EntityId) -> bool {
    world.chest_opened(id) != Some(false)
}
