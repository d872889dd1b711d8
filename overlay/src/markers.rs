//! Marker rendering
//!
//! One pass per frame over the tracked session state:
//!
//! 1. Gate on the master switch, play state and open panels
//! 2. In-world boxes for chests near the player (independent of the map)
//! 3. Map markers per category, then encounter labels, while the large map
//!    is open

use wisps_core::{Category, EntityId, EntityProvider, SessionState, WispSettings};

use crate::canvas::Canvas;
use crate::utils::with_alpha;
use crate::view::MapView;
use crate::widgets::{LabelBox, MarkerSquare};

/// Alpha of the in-world chest boxes
pub const CHEST_BOX_ALPHA: u8 = 60;

/// Renders tracked entities with the user's settings
#[derive(Debug, Clone, Copy)]
pub struct MarkerRenderer<'a> {
    settings: &'a WispSettings,
}

impl<'a> MarkerRenderer<'a> {
    pub fn new(settings: &'a WispSettings) -> Self {
        Self { settings }
    }

    /// Whether anything should be drawn this frame
    pub fn is_active(&self, view: &dyn MapView) -> bool {
        let settings = self.settings;
        settings.enable
            && view.in_game()
            && (settings.ignore_fullscreen_panels || !view.fullscreen_panel_open())
            && (settings.ignore_large_panels || !view.large_panel_open())
    }

    /// Draw one frame. Returns the number of markers drawn.
    pub fn render(
        &self,
        state: &SessionState,
        world: &dyn EntityProvider,
        view: &dyn MapView,
        canvas: &mut dyn Canvas,
    ) -> usize {
        if !self.is_active(view) {
            return 0;
        }

        let mut drawn = self.draw_chest_boxes(state, world, canvas);
        if self.settings.draw_map && view.large_map_visible() {
            drawn += self.draw_map_markers(state, world, view, canvas);
            drawn += self.draw_encounters(state, world, view, canvas);
        }

        tracing::trace!(drawn, "Rendered markers");
        drawn
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Passes
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_chest_boxes(
        &self,
        state: &SessionState,
        world: &dyn EntityProvider,
        canvas: &mut dyn Canvas,
    ) -> usize {
        let style = self.settings.markers.get(Category::Chests);
        if !style.enabled {
            return 0;
        }

        let max_distance = self.settings.chest_screen_display_max_distance as f32;
        let color = with_alpha(style.color, CHEST_BOX_ALPHA);
        let mut drawn = 0;

        for &id in state.entities(Category::Chests) {
            let Some(distance) = world.distance_to_player(id) else {
                continue;
            };
            if distance > max_distance {
                continue;
            }
            let (Some(position), Some(bounds)) = (world.world_position(id), world.render_bounds(id))
            else {
                continue;
            };
            canvas.draw_world_box(position, bounds, color);
            drawn += 1;
        }
        drawn
    }

    fn draw_map_markers(
        &self,
        state: &SessionState,
        world: &dyn EntityProvider,
        view: &dyn MapView,
        canvas: &mut dyn Canvas,
    ) -> usize {
        let mut drawn = 0;

        for category in Category::ALL {
            let style = self.settings.markers.get(category);
            if !style.is_visible() {
                continue;
            }

            for &id in state.entities(category) {
                let Some(grid) = world.grid_position(id) else {
                    continue;
                };
                let center = view.grid_to_map(grid);
                match &style.label {
                    Some(label) => {
                        LabelBox::new(label, style.color).render(canvas, center);
                    }
                    None => MarkerSquare::new(style.size, style.color).render(canvas, center),
                }
                drawn += 1;
            }
        }
        drawn
    }

    fn draw_encounters(
        &self,
        state: &SessionState,
        world: &dyn EntityProvider,
        view: &dyn MapView,
        canvas: &mut dyn Canvas,
    ) -> usize {
        // Sorted so overlapping labels stack the same way every frame
        let mut encounters: Vec<(&EntityId, &String)> = state.encounters().iter().collect();
        encounters.sort_unstable_by_key(|(id, _)| **id);

        let mut drawn = 0;
        for (&id, label) in encounters {
            let Some(grid) = world.grid_position(id) else {
                continue;
            };
            LabelBox::new(label, self.settings.encounter_color)
                .render(canvas, view.grid_to_map(grid));
            drawn += 1;
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas, ScreenRect};
    use crate::view::StaticMapView;
    use crate::widgets::LABEL_BACKGROUND;
    use wisps_core::world::mock::{MockEntity, MockWorld};
    use wisps_core::{Vec2, Vec3, WispTracker};

    const BLUE_WISP_PATH: &str =
        "Art/Models/MiscellaneousObjects/League_Azmeri/resources/wisp_doodads/wisp_primal.ao";

    fn enabled_settings() -> WispSettings {
        WispSettings {
            enable: true,
            ..WispSettings::default()
        }
    }

    struct Scene {
        world: MockWorld,
        tracker: WispTracker,
    }

    impl Scene {
        fn new() -> Self {
            Self {
                world: MockWorld::new(),
                tracker: WispTracker::new(),
            }
        }

        fn add(&mut self, entity: MockEntity) -> EntityId {
            let id = self.world.spawn(entity);
            self.tracker.on_entity_added(id, &self.world);
            id
        }

        fn render(&self, settings: &WispSettings, view: &StaticMapView) -> RecordingCanvas {
            let mut canvas = RecordingCanvas::new();
            MarkerRenderer::new(settings).render(
                self.tracker.state(),
                &self.world,
                view,
                &mut canvas,
            );
            canvas
        }
    }

    fn chest(distance: f32) -> MockEntity {
        MockEntity::new("Metadata/Chests/LeagueAzmeri/Foo")
            .with_chest_opened(false)
            .at_grid(5.0, 5.0)
            .at_world(50.0, 50.0, 0.0)
            .with_render_bounds(Vec3::new(1.0, 1.0, 1.0), Vec3::default())
            .with_distance(distance)
    }

    #[test]
    fn test_blue_wisp_square_on_map() {
        let mut scene = Scene::new();
        scene.add(
            MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriResourceBase")
                .with_animated_path(BLUE_WISP_PATH)
                .at_grid(10.0, 0.0),
        );

        let settings = enabled_settings();
        let canvas = scene.render(&settings, &StaticMapView::default());

        let size = settings.markers.blue.size as f32;
        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Box {
                rect: ScreenRect::centered(Vec2::new(10.0, 5.0), size, size),
                color: settings.markers.blue.color,
                outline: None,
            }]
        );
    }

    #[test]
    fn test_nothing_drawn_when_disabled_or_out_of_game() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb").at_grid(1.0, 1.0));
        scene.add(chest(10.0));

        let disabled = WispSettings::default();
        assert!(scene.render(&disabled, &StaticMapView::default()).commands.is_empty());

        let loading = StaticMapView {
            in_game: false,
            ..StaticMapView::default()
        };
        assert!(scene.render(&enabled_settings(), &loading).commands.is_empty());
    }

    #[test]
    fn test_panels_suppress_unless_ignored() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb").at_grid(1.0, 1.0));

        let fullscreen = StaticMapView {
            fullscreen_panel_open: true,
            ..StaticMapView::default()
        };
        let large = StaticMapView {
            large_panel_open: true,
            ..StaticMapView::default()
        };

        let mut settings = enabled_settings();
        assert!(scene.render(&settings, &fullscreen).commands.is_empty());
        assert!(scene.render(&settings, &large).commands.is_empty());

        settings.ignore_fullscreen_panels = true;
        assert_eq!(scene.render(&settings, &fullscreen).commands.len(), 1);
        assert!(scene.render(&settings, &large).commands.is_empty());

        settings.ignore_large_panels = true;
        assert_eq!(scene.render(&settings, &large).commands.len(), 1);
    }

    #[test]
    fn test_map_markers_need_visible_map_and_draw_map() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriFlaskRefill").at_grid(1.0, 1.0));

        let hidden_map = StaticMapView {
            large_map_visible: false,
            ..StaticMapView::default()
        };
        assert!(scene.render(&enabled_settings(), &hidden_map).commands.is_empty());

        let mut settings = enabled_settings();
        settings.draw_map = false;
        assert!(scene.render(&settings, &StaticMapView::default()).commands.is_empty());
    }

    #[test]
    fn test_chest_boxes_ignore_map_visibility() {
        let mut scene = Scene::new();
        scene.add(chest(10.0));

        let hidden_map = StaticMapView {
            large_map_visible: false,
            ..StaticMapView::default()
        };
        let settings = enabled_settings();
        let canvas = scene.render(&settings, &hidden_map);

        assert_eq!(
            canvas.commands,
            vec![DrawCommand::WorldBox {
                position: Vec3::new(50.0, 50.0, 0.0),
                bounds: wisps_core::RenderBounds {
                    extents: Vec3::new(1.0, 1.0, 1.0),
                    rotation: Vec3::default(),
                },
                color: with_alpha(settings.markers.chests.color, CHEST_BOX_ALPHA),
            }]
        );
    }

    #[test]
    fn test_chest_boxes_respect_max_distance() {
        let mut scene = Scene::new();
        scene.add(chest(50.0));
        scene.add(chest(150.0));
        // No distance component: never drawn in world
        scene.add(MockEntity::new("Metadata/Chests/LeagueAzmeri/Bar").with_chest_opened(false));

        let hidden_map = StaticMapView {
            large_map_visible: false,
            ..StaticMapView::default()
        };
        let mut settings = enabled_settings();
        assert_eq!(scene.render(&settings, &hidden_map).world_boxes(), 1);

        settings.chest_screen_display_max_distance = 200;
        assert_eq!(scene.render(&settings, &hidden_map).world_boxes(), 2);
    }

    #[test]
    fn test_labeled_categories_draw_text_boxes() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/NPC/League/Azmeri/UniqueDealer").at_grid(0.0, 0.0));

        let settings = enabled_settings();
        let canvas = scene.render(&settings, &StaticMapView::default());

        assert_eq!(canvas.texts(), vec!["Dealer"]);
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::Box {
                color: LABEL_BACKGROUND,
                outline: None,
                ..
            }
        ));
    }

    #[test]
    fn test_hidden_categories_are_skipped() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb").at_grid(1.0, 1.0));
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriFuelResupply").at_grid(2.0, 2.0));

        let mut settings = enabled_settings();
        settings.markers.light_bomb.size = 0;
        settings.markers.fuel_refill.enabled = false;

        assert!(scene.render(&settings, &StaticMapView::default()).commands.is_empty());
    }

    #[test]
    fn test_encounters_use_encounter_color() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/NPC/Ghostrider").at_grid(3.0, 3.0));
        // Encounter without a grid position is skipped
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriShrine"));

        let mut settings = enabled_settings();
        settings.encounter_color = [0, 255, 0, 255];
        let canvas = scene.render(&settings, &StaticMapView::default());

        assert_eq!(canvas.texts(), vec!["Ghostrider"]);
        assert!(canvas.commands.iter().any(|command| matches!(
            command,
            DrawCommand::Text {
                color: [0, 255, 0, 255],
                ..
            }
        )));
    }

    #[test]
    fn test_render_returns_marker_count() {
        let mut scene = Scene::new();
        scene.add(MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb").at_grid(1.0, 1.0));
        scene.add(MockEntity::new("Metadata/NPC/Ghostrider").at_grid(3.0, 3.0));
        scene.add(chest(10.0));

        let settings = enabled_settings();
        let mut canvas = RecordingCanvas::new();
        let drawn = MarkerRenderer::new(&settings).render(
            scene.tracker.state(),
            &scene.world,
            &StaticMapView::default(),
            &mut canvas,
        );
        // Light bomb square, chest world box, chest map square, encounter label
        assert_eq!(drawn, 4);
    }
}
