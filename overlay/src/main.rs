//! Demo binary rendering one overlay frame from a scripted mock world
//!
//! Run with: cargo run -p wisps-overlay --features demo -- [output.png] [settings.toml]
//!
//! The demo spawns a handful of league entities, feeds them through the
//! tracker as world signals over a few frames (one well gets activated and
//! one wisp despawns), then renders the surviving markers to a PNG.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use wisps_core::config::load_settings_from;
use wisps_core::signals::dispatch_all;
use wisps_core::world::mock::{MockEntity, MockWorld};
use wisps_core::{EntityId, Vec2, Vec3, WispSettings, WispTracker, WorldSignal};
use wisps_overlay::{Camera, MarkerRenderer, OverlayFrame, StaticMapView};

const FRAME_WIDTH: u32 = 640;
const FRAME_HEIGHT: u32 = 480;
const DEFAULT_OUTPUT: &str = "wisps-demo.png";

const RESOURCE: &str = "Metadata/MiscellaneousObjects/Azmeri/AzmeriResourceBase";
const WISP_PATH_BASE: &str = "Art/Models/MiscellaneousObjects/League_Azmeri/resources/wisp_doodads";

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // If WISPS_LOG_PATH is set, append to that file
    if let Ok(path) = std::env::var("WISPS_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            return;
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn wisp(kind: &str, x: f32, y: f32) -> MockEntity {
    MockEntity::new(RESOURCE)
        .with_animated_path(format!("{WISP_PATH_BASE}/{kind}.ao"))
        .at_grid(x, y)
}

fn demo_settings(path: Option<&Path>) -> WispSettings {
    let mut settings = match path {
        Some(path) => match load_settings_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load settings, using defaults");
                WispSettings::default()
            }
        },
        None => WispSettings::default(),
    };
    // The overlay is off by default; the demo always wants output
    settings.enable = true;
    settings
}

/// Spawn the scripted scene and return the ids the script acts on later
fn populate(world: &mut MockWorld) -> (Vec<WorldSignal>, EntityId, EntityId) {
    let mut ids = Vec::new();

    ids.push(world.spawn(wisp("wisp_primal", 20.0, -10.0)));
    ids.push(world.spawn(wisp("wisp_warden", -25.0, 15.0)));
    ids.push(world.spawn(wisp("wisp_vodoo", 40.0, 30.0)));
    let fading = world.spawn(wisp("wisp_primal", -40.0, -35.0));
    ids.push(fading);

    let well = world.spawn(
        MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriFlaskRefill")
            .with_state("activated", 0)
            .at_grid(60.0, -20.0),
    );
    ids.push(well);
    ids.push(world.spawn(
        MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriFlaskRefill")
            .with_state("activated", 0)
            .at_grid(-60.0, 40.0),
    ));
    ids.push(world.spawn(
        MockEntity::new("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb").at_grid(10.0, 55.0),
    ));
    ids.push(world.spawn(
        MockEntity::new("Metadata/NPC/League/Azmeri/UniqueDealer").at_grid(-10.0, -60.0),
    ));
    ids.push(world.spawn(
        MockEntity::new("Metadata/NPC/Ghostrider").at_grid(75.0, 10.0),
    ));
    ids.push(world.spawn(
        MockEntity::new("Metadata/Chests/LeagueAzmeri/AzmeriChestLarge")
            .with_chest_opened(false)
            .with_render_bounds(Vec3::new(2.0, 1.5, 1.5), Vec3::new(0.0, 0.0, 0.4))
            .at_world(6.0, -4.0, 0.0)
            .at_grid(6.0, -4.0)
            .with_distance(45.0),
    ));

    let signals = ids
        .into_iter()
        .map(|entity_id| WorldSignal::EntityAdded { entity_id })
        .collect();
    (signals, well, fading)
}

fn run(output: &Path, settings_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = demo_settings(settings_path);
    let mut world = MockWorld::new();
    let mut tracker = WispTracker::new();

    // Frame 1: enter the area and see everything spawn
    let (spawned, well, fading) = populate(&mut world);
    let mut signals = vec![WorldSignal::AreaChanged {
        area_name: "The Viridian Wildwood".to_string(),
    }];
    signals.extend(spawned);
    signals.push(WorldSignal::Tick);
    dispatch_all(&mut tracker, &signals, &world);

    // Frame 2: the player drinks from a well
    if let Some(entity) = world.get_mut(well) {
        entity.set_state("activated", 1);
    }
    dispatch_all(&mut tracker, &[WorldSignal::Tick], &world);

    // Frame 3: a wisp is collected and leaves the world
    world.despawn(fading);
    dispatch_all(
        &mut tracker,
        &[WorldSignal::EntityRemoved { entity_id: fading }, WorldSignal::Tick],
        &world,
    );

    for (category, count) in tracker.state().counts() {
        tracing::info!(%category, count, "Tracked");
    }

    let center = Vec2::new(FRAME_WIDTH as f32 / 2.0, FRAME_HEIGHT as f32 / 2.0);
    let view = StaticMapView {
        map_center: center,
        map_scale: 2.5,
        ..StaticMapView::default()
    };
    let camera = Camera {
        focus: Vec3::default(),
        screen_center: center,
        scale: 8.0,
    };

    let mut frame = OverlayFrame::new(FRAME_WIDTH, FRAME_HEIGHT, camera)?;
    frame.begin_frame();
    let drawn = MarkerRenderer::new(&settings).render(tracker.state(), &world, &view, &mut frame);

    std::fs::write(output, frame.encode_png()?)?;
    tracing::info!(
        drawn,
        area = %tracker.area().area_name,
        path = %output.display(),
        "Wrote overlay frame"
    );
    Ok(())
}

fn main() {
    init_logging();

    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let settings_path = args.next().map(PathBuf::from);

    if let Err(e) = run(&output, settings_path.as_deref()) {
        tracing::error!(error = %e, "Demo failed");
        std::process::exit(1);
    }
}
