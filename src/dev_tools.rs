//! Development tools for the game. Only compiled with the `dev` feature.

use bevy::prelude::*;

use crate::game::snake_visualizer::ActiveGame;
use crate::snake_game::Phase;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        log_phase_transitions.run_if(resource_exists::<ActiveGame>.and_then(resource_changed::<ActiveGame>)),
    );
}

fn log_phase_transitions(game: Res<ActiveGame>, mut last: Local<Option<Phase>>) {
    let phase = game.phase();
    if *last != Some(phase) {
        debug!("phase {:?} -> {phase:?} (score {}, length {})", *last, game.score(), game.snake().len());
        *last = Some(phase);
    }
}
