//! In-memory [`EntityProvider`] for tests and demos.

use hashbrown::HashMap;

use super::{EntityId, EntityProvider, RenderBounds, StateFlag, Vec2, Vec3};

/// Component data of one mock entity. Unset components read as absent.
#[derive(Debug, Clone, Default)]
pub struct MockEntity {
    pub metadata: String,
    pub animated_path: Option<String>,
    pub state_flags: Option<Vec<StateFlag>>,
    pub chest_opened: Option<bool>,
    pub render_bounds: Option<RenderBounds>,
    pub grid_position: Option<Vec2>,
    pub world_position: Option<Vec3>,
    pub distance_to_player: Option<f32>,
}

impl MockEntity {
    pub fn new(metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            ..Self::default()
        }
    }

    pub fn with_animated_path(mut self, path: impl Into<String>) -> Self {
        self.animated_path = Some(path.into());
        self
    }

    pub fn with_state(mut self, name: impl Into<String>, value: i64) -> Self {
        self.state_flags
            .get_or_insert_with(Vec::new)
            .push(StateFlag::new(name, value));
        self
    }

    pub fn with_chest_opened(mut self, opened: bool) -> Self {
        self.chest_opened = Some(opened);
        self
    }

    pub fn with_render_bounds(mut self, extents: Vec3, rotation: Vec3) -> Self {
        self.render_bounds = Some(RenderBounds { extents, rotation });
        self
    }

    pub fn at_grid(mut self, x: f32, y: f32) -> Self {
        self.grid_position = Some(Vec2::new(x, y));
        self
    }

    pub fn at_world(mut self, x: f32, y: f32, z: f32) -> Self {
        self.world_position = Some(Vec3::new(x, y, z));
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance_to_player = Some(distance);
        self
    }

    /// Set (or add) a state flag value
    pub fn set_state(&mut self, name: &str, value: i64) {
        let flags = self.state_flags.get_or_insert_with(Vec::new);
        match flags.iter_mut().find(|flag| flag.name == name) {
            Some(flag) => flag.value = value,
            None => flags.push(StateFlag::new(name, value)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockWorld {
    entities: HashMap<EntityId, MockEntity>,
    next_id: u64,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity under a fresh id
    pub fn spawn(&mut self, entity: MockEntity) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.entities.insert(id, entity);
        id
    }

    pub fn despawn(&mut self, id: EntityId) -> Option<MockEntity> {
        self.entities.remove(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut MockEntity> {
        self.entities.get_mut(&id)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityProvider for MockWorld {
    fn metadata(&self, id: EntityId) -> Option<&str> {
        self.entities.get(&id).map(|e| e.metadata.as_str())
    }

    fn animated_path(&self, id: EntityId) -> Option<&str> {
        self.entities.get(&id)?.animated_path.as_deref()
    }

    fn state_flags(&self, id: EntityId) -> Option<&[StateFlag]> {
        self.entities.get(&id)?.state_flags.as_deref()
    }

    fn chest_opened(&self, id: EntityId) -> Option<bool> {
        self.entities.get(&id)?.chest_opened
    }

    fn render_bounds(&self, id: EntityId) -> Option<RenderBounds> {
        self.entities.get(&id)?.render_bounds
    }

    fn grid_position(&self, id: EntityId) -> Option<Vec2> {
        self.entities.get(&id)?.grid_position
    }

    fn world_position(&self, id: EntityId) -> Option<Vec3> {
        self.entities.get(&id)?.world_position
    }

    fn distance_to_player(&self, id: EntityId) -> Option<f32> {
        self.entities.get(&id)?.distance_to_player
    }
}
