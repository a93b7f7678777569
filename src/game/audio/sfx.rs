use bevy::{audio::PlaybackMode, prelude::*};

use crate::game::assets::{HandleMap, SfxKey};
use crate::snake_game::GameEvent;

pub(super) fn plugin(app: &mut App) {
    app.observe(play_sfx);
}

fn play_sfx(
    trigger: Trigger<PlaySfx>,
    mut commands: Commands,
    sfx_handles: Res<HandleMap<SfxKey>>,
) {
    let PlaySfx::Key(sfx_key) = trigger.event();
    commands.spawn(AudioSourceBundle {
        source: sfx_handles[sfx_key].clone_weak(),
        settings: PlaybackSettings {
            mode: PlaybackMode::Despawn,
            ..default()
        },
    });
}

/// Trigger this event to play a single sound effect.
#[derive(Event, Debug)]
pub enum PlaySfx {
    Key(SfxKey),
}

impl PlaySfx {
    /// The sound a game event makes, if any.
    pub fn for_game_event(event: GameEvent) -> Option<PlaySfx> {
        match event {
            GameEvent::Grow => Some(PlaySfx::Key(SfxKey::Ding)),
            GameEvent::Crash => Some(PlaySfx::Key(SfxKey::Crash)),
            GameEvent::GameOver(_) => None,
        }
    }
}
