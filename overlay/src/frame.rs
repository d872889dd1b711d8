//! Software overlay frame
//!
//! `OverlayFrame` is a [`Canvas`] backed by a `tiny-skia` pixmap:
//! - Boxes and world boxes are filled/stroked paths
//! - Text is shaped and rasterized with `cosmic-text`
//! - World positions are projected with a fixed isometric [`Camera`]
//!
//! Hosts that composite a transparent layer over the game can draw into a
//! frame each update and upload [`OverlayFrame::pixels`].

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};
use wisps_core::{RenderBounds, Vec2, Vec3};

use crate::camera::Camera;
use crate::canvas::{Canvas, ScreenRect};
use crate::utils::color_from_rgba;

const DEFAULT_FONT_SIZE: f32 = 13.0;
const LINE_HEIGHT_FACTOR: f32 = 1.2;
const WORLD_BOX_STROKE: f32 = 1.5;

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("invalid overlay size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Png(String),
}

/// A frame wrapper around a pixmap that implements the drawing primitives
pub struct OverlayFrame {
    pixmap: Pixmap,
    font_system: FontSystem,
    swash_cache: SwashCache,
    font_size: f32,
    camera: Camera,
}

impl OverlayFrame {
    /// Create a transparent frame of the given size
    pub fn new(width: u32, height: u32, camera: Camera) -> Result<Self, OverlayError> {
        let pixmap = Pixmap::new(width, height).ok_or(OverlayError::InvalidSize { width, height })?;

        Ok(Self {
            pixmap,
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            font_size: DEFAULT_FONT_SIZE,
            camera,
        })
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Begin a new frame: clear to transparent
    pub fn begin_frame(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Premultiplied RGBA pixels of the current frame
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, OverlayError> {
        self.pixmap
            .encode_png()
            .map_err(|e| OverlayError::Png(e.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────

    fn metrics(&self) -> Metrics {
        Metrics::new(self.font_size, self.font_size * LINE_HEIGHT_FACTOR)
    }

    fn shape(&mut self, text: &str) -> Buffer {
        let metrics = self.metrics();
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_text(&mut self.font_system, text, Attrs::new(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paths
    // ─────────────────────────────────────────────────────────────────────────

    fn paint(rgba: [u8; 4]) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color_from_rgba(rgba));
        paint.anti_alias = true;
        paint
    }

    fn polygon(points: &[Vec2]) -> Option<Path> {
        let (first, rest) = points.split_first()?;
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        builder.close();
        builder.finish()
    }

    fn segment(from: Vec2, to: Vec2) -> Option<Path> {
        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);
        builder.finish()
    }
}

impl Canvas for OverlayFrame {
    fn draw_box(&mut self, rect: ScreenRect, color: [u8; 4], outline: Option<f32>) {
        let Some(r) = Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) else {
            return;
        };
        let paint = Self::paint(color);

        match outline {
            None => self.pixmap.fill_rect(r, &paint, Transform::identity(), None),
            Some(width) => {
                let path = PathBuilder::from_rect(r);
                let stroke = Stroke {
                    width,
                    ..Stroke::default()
                };
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: [u8; 4]) {
        let mut buffer = self.shape(text);
        let text_color = cosmic_text::Color::rgba(color[0], color[1], color[2], color[3]);
        let pixmap = &mut self.pixmap;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |x, y, w, h, glyph_color| {
                if glyph_color.a() == 0 {
                    return;
                }
                let Some(rect) = Rect::from_xywh(
                    position.x + x as f32,
                    position.y + y as f32,
                    w as f32,
                    h as f32,
                ) else {
                    return;
                };
                let mut paint = Paint::default();
                paint.set_color_rgba8(
                    glyph_color.r(),
                    glyph_color.g(),
                    glyph_color.b(),
                    glyph_color.a(),
                );
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            },
        );
    }

    fn measure_text(&mut self, text: &str) -> Vec2 {
        let line_height = self.metrics().line_height;
        let buffer = self.shape(text);

        let (width, lines) = buffer
            .layout_runs()
            .fold((0.0_f32, 0_usize), |(width, lines), run| {
                (width.max(run.line_w), lines + 1)
            });
        Vec2::new(width, lines.max(1) as f32 * line_height)
    }

    fn draw_world_box(&mut self, position: Vec3, bounds: RenderBounds, color: [u8; 4]) {
        let corners = Camera::box_corners(position, bounds).map(|corner| self.camera.project(corner));
        let paint = Self::paint(color);

        // Translucent top face
        if let Some(top) = Self::polygon(&corners[4..8]) {
            self.pixmap
                .fill_path(&top, &paint, FillRule::Winding, Transform::identity(), None);
        }

        // All twelve edges
        let stroke = Stroke {
            width: WORLD_BOX_STROKE,
            ..Stroke::default()
        };
        for i in 0..4 {
            let next = (i + 1) % 4;
            let edges = [
                (corners[i], corners[next]),
                (corners[i + 4], corners[next + 4]),
                (corners[i], corners[i + 4]),
            ];
            for (from, to) in edges {
                if let Some(path) = Self::segment(from, to) {
                    self.pixmap
                        .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                }
            }
        }
    }
}
