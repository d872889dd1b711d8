//! Overlay settings
//!
//! Settings are plain serde structs persisted as TOML by the core crate.
//! Every field has a default so partial files load cleanly, and numeric
//! options carry explicit ranges that [`WispSettings::clamp_ranges`] enforces
//! after loading.

use serde::{Deserialize, Serialize};

use crate::Category;

/// RGBA color, one byte per channel
pub type Color = [u8; 4];

/// Named colors used by the default settings
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [255, 255, 255, 255];
    pub const YELLOW: Color = [255, 255, 0, 255];
    pub const SKY_BLUE: Color = [135, 206, 235, 255];
    pub const PURPLE: Color = [128, 0, 128, 255];
    pub const ORANGE: Color = [255, 165, 0, 255];
    pub const GREEN: Color = [0, 128, 0, 255];
    pub const RED: Color = [255, 0, 0, 255];
    pub const HOT_PINK: Color = [255, 105, 180, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Marker size bounds in pixels. A size of 0 hides the category on the map.
pub const MARKER_SIZE_MIN: u32 = 0;
pub const MARKER_SIZE_MAX: u32 = 100;
pub const MARKER_SIZE_DEFAULT: u32 = 5;

/// Chest in-world box distance bounds (distance-to-player units)
pub const CHEST_DISTANCE_MIN: u32 = 1;
pub const CHEST_DISTANCE_MAX: u32 = 200;
pub const CHEST_DISTANCE_DEFAULT: u32 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Marker styles
// ─────────────────────────────────────────────────────────────────────────────

/// How one category is drawn on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub enabled: bool,
    pub color: Color,
    /// Square size in pixels (ignored when `label` is set)
    pub size: u32,
    /// Draw a text box with this label instead of a square
    pub label: Option<String>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: colors::WHITE,
            size: MARKER_SIZE_DEFAULT,
            label: None,
        }
    }
}

impl MarkerStyle {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether anything should be drawn for this style
    pub fn is_visible(&self) -> bool {
        self.enabled && self.size > 0
    }
}

/// Per-category marker styles, one named table per category in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyles {
    pub yellow: MarkerStyle,
    pub purple: MarkerStyle,
    pub blue: MarkerStyle,
    pub light_bomb: MarkerStyle,
    pub wells: MarkerStyle,
    pub fuel_refill: MarkerStyle,
    pub altars: MarkerStyle,
    pub dust_converters: MarkerStyle,
    pub dealer: MarkerStyle,
    pub chests: MarkerStyle,
}

impl Default for MarkerStyles {
    fn default() -> Self {
        Self {
            yellow: MarkerStyle::new(colors::YELLOW),
            purple: MarkerStyle::new(colors::PURPLE),
            blue: MarkerStyle::new(colors::SKY_BLUE),
            light_bomb: MarkerStyle::new(colors::WHITE),
            wells: MarkerStyle::new(colors::ORANGE),
            fuel_refill: MarkerStyle::new(colors::GREEN),
            altars: MarkerStyle::new(colors::RED).with_label("Altar"),
            dust_converters: MarkerStyle::new(colors::HOT_PINK).with_label("Dust"),
            dealer: MarkerStyle::new(colors::HOT_PINK).with_label("Dealer"),
            chests: MarkerStyle::new(colors::WHITE),
        }
    }
}

impl MarkerStyles {
    pub fn get(&self, category: Category) -> &MarkerStyle {
        match category {
            Category::Yellow => &self.yellow,
            Category::Purple => &self.purple,
            Category::Blue => &self.blue,
            Category::LightBomb => &self.light_bomb,
            Category::Wells => &self.wells,
            Category::FuelRefill => &self.fuel_refill,
            Category::Altars => &self.altars,
            Category::DustConverters => &self.dust_converters,
            Category::Dealer => &self.dealer,
            Category::Chests => &self.chests,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut MarkerStyle {
        match category {
            Category::Yellow => &mut self.yellow,
            Category::Purple => &mut self.purple,
            Category::Blue => &mut self.blue,
            Category::LightBomb => &mut self.light_bomb,
            Category::Wells => &mut self.wells,
            Category::FuelRefill => &mut self.fuel_refill,
            Category::Altars => &mut self.altars,
            Category::DustConverters => &mut self.dust_converters,
            Category::Dealer => &mut self.dealer,
            Category::Chests => &mut self.chests,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Top-level settings
// ═══════════════════════════════════════════════════════════════════════════

/// All user-facing options of the overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WispSettings {
    /// Master switch for all drawing
    pub enable: bool,
    /// Draw markers on the large map
    pub draw_map: bool,
    pub markers: MarkerStyles,
    /// Color of encounter label markers
    pub encounter_color: Color,
    /// Chests further than this from the player get no in-world box
    pub chest_screen_display_max_distance: u32,
    /// Keep drawing while a fullscreen panel is open
    pub ignore_fullscreen_panels: bool,
    /// Keep drawing while a large side panel is open
    pub ignore_large_panels: bool,
}

impl Default for WispSettings {
    fn default() -> Self {
        Self {
            enable: false,
            draw_map: true,
            markers: MarkerStyles::default(),
            encounter_color: colors::WHITE,
            chest_screen_display_max_distance: CHEST_DISTANCE_DEFAULT,
            ignore_fullscreen_panels: false,
            ignore_large_panels: false,
        }
    }
}

impl WispSettings {
    /// Clamp numeric options into their valid ranges.
    ///
    /// Returns the names of the options that were out of range.
    pub fn clamp_ranges(&mut self) -> Vec<String> {
        let mut clamped = Vec::new();

        for category in Category::ALL {
            let style = self.markers.get_mut(category);
            let size = style.size.clamp(MARKER_SIZE_MIN, MARKER_SIZE_MAX);
            if size != style.size {
                style.size = size;
                clamped.push(format!("markers.{}.size", snake_name(category)));
            }
        }

        let distance = self
            .chest_screen_display_max_distance
            .clamp(CHEST_DISTANCE_MIN, CHEST_DISTANCE_MAX);
        if distance != self.chest_screen_display_max_distance {
            self.chest_screen_display_max_distance = distance;
            clamped.push("chest_screen_display_max_distance".to_string());
        }

        clamped
    }
}

fn snake_name(category: Category) -> &'static str {
    match category {
        Category::Yellow => "yellow",
        Category::Purple => "purple",
        Category::Blue => "blue",
        Category::LightBomb => "light_bomb",
        Category::Wells => "wells",
        Category::FuelRefill => "fuel_refill",
        Category::Altars => "altars",
        Category::DustConverters => "dust_converters",
        Category::Dealer => "dealer",
        Category::Chests => "chests",
    }
}
