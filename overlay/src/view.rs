//! Host screen state needed to decide what to draw and where

use wisps_core::Vec2;

/// Screen context and large-map projection supplied by the host
pub trait MapView {
    /// Game is in an active play state (not loading, not in menus)
    fn in_game(&self) -> bool;

    fn large_map_visible(&self) -> bool;

    fn fullscreen_panel_open(&self) -> bool;

    fn large_panel_open(&self) -> bool;

    /// Project a terrain grid position onto the large map in screen pixels
    fn grid_to_map(&self, grid: Vec2) -> Vec2;
}

/// A fixed view with an isometric map projection centered on the player.
///
/// Useful for tests and for hosts that already know the map transform.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapView {
    pub in_game: bool,
    pub large_map_visible: bool,
    pub fullscreen_panel_open: bool,
    pub large_panel_open: bool,
    /// Screen position of the player on the large map
    pub map_center: Vec2,
    /// Player position on the terrain grid
    pub player_grid: Vec2,
    /// Map pixels per grid cell
    pub map_scale: f32,
}

impl Default for StaticMapView {
    fn default() -> Self {
        Self {
            in_game: true,
            large_map_visible: true,
            fullscreen_panel_open: false,
            large_panel_open: false,
            map_center: Vec2::default(),
            player_grid: Vec2::default(),
            map_scale: 1.0,
        }
    }
}

impl MapView for StaticMapView {
    fn in_game(&self) -> bool {
        self.in_game
    }

    fn large_map_visible(&self) -> bool {
        self.large_map_visible
    }

    fn fullscreen_panel_open(&self) -> bool {
        self.fullscreen_panel_open
    }

    fn large_panel_open(&self) -> bool {
        self.large_panel_open
    }

    fn grid_to_map(&self, grid: Vec2) -> Vec2 {
        // Grid axes run diagonally on the map: +x is down-right, +y is down-left
        let dx = grid.x - self.player_grid.x;
        let dy = grid.y - self.player_grid.y;
        Vec2::new(
            self.map_center.x + (dx - dy) * self.map_scale,
            self.map_center.y + (dx + dy) * self.map_scale * 0.5,
        )
    }
}
