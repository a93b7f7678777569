use bevy::prelude::*;

use crate::game::assets::{HandleMap, SoundtrackKey};

pub mod sfx;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(sfx::plugin);
    app.add_systems(Startup, play_background_music);
}

#[derive(Component)]
struct Soundtrack;

fn play_background_music(
    mut commands: Commands,
    soundtrack_handles: Res<HandleMap<SoundtrackKey>>,
) {
    commands.spawn((
        Name::new("Soundtrack"),
        AudioSourceBundle {
            source: soundtrack_handles[&SoundtrackKey::Gameplay].clone_weak(),
            settings: PlaybackSettings::LOOP,
        },
        Soundtrack,
    ));
}
