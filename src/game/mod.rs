//! Windowed front end: assets, sound, board rendering and the HUD around the
//! engine-free core in [`crate::snake_game`].

use bevy::prelude::*;

pub mod assets;
pub mod audio;
pub mod hud;
pub mod snake_visualizer;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        audio::plugin,
        assets::plugin,

        snake_visualizer::plugin,
        hud::plugin,
    ));
}
