use wisps_core::Vec2;
use wisps_types::Color;

use crate::canvas::{Canvas, ScreenRect};

/// A filled square centered on its anchor point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSquare {
    pub size: f32,
    pub color: Color,
}

impl MarkerSquare {
    pub fn new(size: u32, color: Color) -> Self {
        Self {
            size: size as f32,
            color,
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas, center: Vec2) {
        canvas.draw_box(ScreenRect::centered(center, self.size, self.size), self.color, None);
    }
}
