//! Score readout and the game-over banner.

use bevy::prelude::*;

use crate::game::snake_visualizer::ActiveGame;
use crate::snake_game::GameState;
use crate::AppSet;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud);
    app.add_systems(
        Update,
        update_hud
            .run_if(resource_exists::<ActiveGame>.and_then(resource_changed::<ActiveGame>))
            .in_set(AppSet::Update),
    );
}

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct GameOverText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Score"),
        TextBundle::from_section(
            score_line(0),
            TextStyle {
                font_size: 30.0,
                color: Color::srgb_u8(200, 200, 200),
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(20.0),
            ..default()
        }),
        ScoreText,
    ));

    commands.spawn((
        Name::new("Game Over"),
        TextBundle::from_section(
            String::new(),
            TextStyle {
                font_size: 36.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_text_justify(JustifyText::Center)
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Percent(35.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        }),
        Visibility::Hidden,
        GameOverText,
    ));
}

fn score_line(score: u32) -> String {
    format!("Score: {score}")
}

fn game_over_banner(state: &GameState) -> Option<String> {
    if state.is_running() { return None; }
    Some(format!(
        "GAME OVER!\nFINAL SCORE: {}\nPress Enter to play again or Escape to Exit",
        state.score()
    ))
}

fn update_hud(
    game: Res<ActiveGame>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<GameOverText>)>,
    mut banner_query: Query<(&mut Text, &mut Visibility), (With<GameOverText>, Without<ScoreText>)>,
) {
    for mut text in &mut score_query {
        text.sections[0].value = score_line(game.score());
    }
    for (mut text, mut visibility) in &mut banner_query {
        match game_over_banner(&game) {
            Some(banner) => {
                text.sections[0].value = banner;
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake_game::{GameConfig, GridPoint, Heading};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn banner_only_after_game_over() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = GameConfig { initial_food: Some(GridPoint::new(4, 0)), ..Default::default() };
        let mut state = GameState::from_config(&config, &mut rng);
        assert!(game_over_banner(&state).is_none());

        state.tick(Some(Heading::Up), &mut rng);
        assert_eq!(state.score(), 1);
        state.tick(None, &mut rng);
        let banner = game_over_banner(&state).unwrap();
        assert!(banner.contains("FINAL SCORE: 1"));
        assert_eq!(score_line(state.score()), "Score: 1");
    }
}
