pub mod cmdline;
#[cfg(feature = "dev")]
mod dev_tools;
mod game;
pub mod headless;
pub mod snake_game;

use bevy::{
    asset::AssetMetaCheck, audio::{AudioPlugin, Volume}, prelude::*, window::WindowResolution
};

use snake_game::{GameConfig, Grid};

/// Settings the windowed game was started with.
#[derive(Resource, Clone, Debug, Deref)]
pub struct GameSettings(pub GameConfig);

pub struct AppPlugin {
    pub config: GameConfig,
}

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Order new `AppSet` variants by adding them here:
        app.configure_sets(
            Update,
            (AppSet::TickTimers, AppSet::RecordInput, AppSet::Update).chain(),
        );

        app.insert_resource(GameSettings(self.config.clone()));
        app.insert_resource(ClearColor(Color::srgb_u8(20, 60, 30)));

        // Spawn the main camera.
        app.add_systems(Startup, spawn_camera);

        // The window shows exactly the playable cells.
        let grid = self.config.grid();
        let window_width = (grid.width as i32 * Grid::CELL_SIZE) as f32;
        let window_height = (grid.height as i32 * Grid::CELL_SIZE) as f32;

        // Add Bevy plugins.
        app.add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    // Wasm builds will check for meta files (that don't exist) if this isn't set.
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Window {
                        title: "Snake".to_string(),
                        canvas: Some("#bevy".to_string()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: true,
                        resizable: false,
                        resolution: WindowResolution::new(window_width, window_height).with_scale_factor_override(1.0),
                        ..default()
                    }
                    .into(),
                    ..default()
                })
                .set(AudioPlugin {
                    global_volume: GlobalVolume {
                        volume: Volume::new(0.3),
                    },
                    ..default()
                }),
        );

        app.add_plugins(game::plugin);

        // Enable dev tools for dev builds.
        #[cfg(feature = "dev")]
        app.add_plugins(dev_tools::plugin);
    }
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
enum AppSet {
    /// Tick timers.
    TickTimers,
    /// Record player input.
    RecordInput,
    /// Advance the game and redraw.
    Update,
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera2dBundle::default(),
        // Render all UI to this camera.
        IsDefaultUiCamera,
    ));
}
