//! Wisp tracker core
//!
//! Classifies entities reported by the host game, keeps the per-category
//! live lists for the current area, and evicts entries once they are used up
//! or leave the world. Rendering lives in `wisps-overlay`.

pub mod classify;
pub mod config;
pub mod signals;
pub mod state;
pub mod tracker;
pub mod world;

// Re-exports for convenience
pub use classify::{Classification, classify};
pub use signals::{SignalHandler, WorldSignal};
pub use state::SessionState;
pub use tracker::WispTracker;
pub use world::{EntityId, EntityProvider, RenderBounds, StateFlag, Vec2, Vec3};
pub use wisps_types::{Category, WispSettings};
