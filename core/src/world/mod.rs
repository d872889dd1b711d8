//! Host world access
//!
//! The tracker never owns entity memory. It holds [`EntityId`]s and asks the
//! host for component data through [`EntityProvider`] whenever it needs it.
//! Every query returns `Option`: a missing or unreadable component is `None`,
//! and callers treat `None` as the negative answer.

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::fmt;

/// Stable identifier of a host entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One named entry of an entity's state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFlag {
    pub name: String,
    pub value: i64,
}

impl StateFlag {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Render bounds of an entity: half-extents and rotation (radians, per axis)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderBounds {
    pub extents: Vec3,
    pub rotation: Vec3,
}

/// Component queries answered by the host game state.
pub trait EntityProvider {
    /// Type identifier (metadata path) of the entity
    fn metadata(&self, id: EntityId) -> Option<&str>;

    /// Path of the entity's base animated object
    fn animated_path(&self, id: EntityId) -> Option<&str>;

    /// Current state machine flags
    fn state_flags(&self, id: EntityId) -> Option<&[StateFlag]>;

    /// `Some(true)` once a chest has been opened
    fn chest_opened(&self, id: EntityId) -> Option<bool>;

    fn render_bounds(&self, id: EntityId) -> Option<RenderBounds>;

    /// Position on the terrain grid, used for map projection
    fn grid_position(&self, id: EntityId) -> Option<Vec2>;

    fn world_position(&self, id: EntityId) -> Option<Vec3>;

    fn distance_to_player(&self, id: EntityId) -> Option<f32>;
}
