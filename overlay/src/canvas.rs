//! Drawing surface abstraction
//!
//! The marker renderer only needs four primitives. Hosts implement
//! [`Canvas`] over their own graphics API; [`RecordingCanvas`] captures the
//! calls instead of drawing, which is what the tests use.

use wisps_core::{RenderBounds, Vec2, Vec3};
use wisps_types::Color;

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

pub trait Canvas {
    /// Draw a rectangle: filled when `outline` is `None`, otherwise stroked
    /// with the given line width
    fn draw_box(&mut self, rect: ScreenRect, color: Color, outline: Option<f32>);

    /// Draw text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Size of `text` as `draw_text` would render it
    fn measure_text(&mut self, text: &str) -> Vec2;

    /// Draw a box in world space around `position`
    fn draw_world_box(&mut self, position: Vec3, bounds: RenderBounds, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Box {
        rect: ScreenRect,
        color: Color,
        outline: Option<f32>,
    },
    Text {
        text: String,
        position: Vec2,
        color: Color,
    },
    WorldBox {
        position: Vec3,
        bounds: RenderBounds,
        color: Color,
    },
}

/// Width of one character as measured by [`RecordingCanvas`]
pub const RECORDING_CHAR_WIDTH: f32 = 7.0;
/// Line height as measured by [`RecordingCanvas`]
pub const RECORDING_LINE_HEIGHT: f32 = 14.0;

/// Canvas that records draw calls. Text is measured with fixed per-character
/// metrics.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn world_boxes(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::WorldBox { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_box(&mut self, rect: ScreenRect, color: Color, outline: Option<f32>) {
        self.commands.push(DrawCommand::Box {
            rect,
            color,
            outline,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn measure_text(&mut self, text: &str) -> Vec2 {
        Vec2::new(
            text.chars().count() as f32 * RECORDING_CHAR_WIDTH,
            RECORDING_LINE_HEIGHT,
        )
    }

    fn draw_world_box(&mut self, position: Vec3, bounds: RenderBounds, color: Color) {
        self.commands.push(DrawCommand::WorldBox {
            position,
            bounds,
            color,
        });
    }
}
