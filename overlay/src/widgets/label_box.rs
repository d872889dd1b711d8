//! Label box widget for text markers
//!
//! Renders a background box sized to the measured text plus padding, with
//! the text on top, both centered on the anchor point.

use wisps_core::Vec2;
use wisps_types::Color;

use crate::canvas::{Canvas, ScreenRect};
use crate::utils::truncate_name;

/// Padding in pixels between the text and the edge of its background
pub const LABEL_PADDING: f32 = 3.0;

/// Background fill behind label text
pub const LABEL_BACKGROUND: Color = [30, 30, 30, 180];

/// Labels longer than this are shortened with "..."
const MAX_LABEL_CHARS: usize = 24;

/// A text marker with a padded background
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    pub text: String,
    pub text_color: Color,
    pub background: Color,
    /// Optional outline in the text color
    pub outline_width: Option<f32>,
}

impl LabelBox {
    pub fn new(text: &str, text_color: Color) -> Self {
        Self {
            text: truncate_name(text, MAX_LABEL_CHARS),
            text_color,
            background: LABEL_BACKGROUND,
            outline_width: None,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_outline(mut self, width: f32) -> Self {
        self.outline_width = Some(width);
        self
    }

    /// Render the label centered on `center`, returning the occupied rect
    pub fn render(&self, canvas: &mut dyn Canvas, center: Vec2) -> ScreenRect {
        let text_size = canvas.measure_text(&self.text);
        let rect = ScreenRect::centered(
            center,
            text_size.x + LABEL_PADDING * 2.0,
            text_size.y + LABEL_PADDING * 2.0,
        );

        canvas.draw_box(rect, self.background, None);
        if let Some(width) = self.outline_width {
            canvas.draw_box(rect, self.text_color, Some(width));
        }
        canvas.draw_text(
            &self.text,
            Vec2::new(rect.x + LABEL_PADDING, rect.y + LABEL_PADDING),
            self.text_color,
        );
        rect
    }
}
