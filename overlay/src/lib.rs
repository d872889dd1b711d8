//! Wisp marker overlay
//!
//! Draws the entities tracked by `wisps-core` each frame:
//! - **Map markers**: squares or labeled boxes at each entity's map position
//! - **Encounters**: labeled boxes in the shared encounter color
//! - **Chest boxes**: translucent in-world bounding boxes around nearby chests
//!
//! Drawing goes through the [`Canvas`] trait so hosts can route it to their
//! own primitives. [`OverlayFrame`] is a software implementation on top of a
//! `tiny-skia` pixmap.

pub mod camera;
pub mod canvas;
pub mod frame;
pub mod markers;
pub mod utils;
pub mod view;
pub mod widgets;

pub use camera::Camera;
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, ScreenRect};
pub use frame::{OverlayError, OverlayFrame};
pub use markers::MarkerRenderer;
pub use view::{MapView, StaticMapView};
