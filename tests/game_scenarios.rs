use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use snake_arcade::headless::{parse_moves, HeadlessGame};
use snake_arcade::snake_game::{
    dispatch, GameConfig, GameEvent, GameObserver, GameOverReason, GameState, Grid, GridPoint,
    Heading, Phase, PlaybackEvent, Snake,
};

#[derive(Default)]
struct Cues {
    grow: usize,
    crash: usize,
    game_over: usize,
}

impl GameObserver for Cues {
    fn on_grow(&mut self) { self.grow += 1; }
    fn on_crash(&mut self) { self.crash += 1; }
    fn on_game_over(&mut self, _reason: GameOverReason) { self.game_over += 1; }
}

fn row(cols: std::ops::Range<i16>, y: i16) -> Vec<GridPoint> {
    cols.map(|x| GridPoint::new(x, y)).collect()
}

#[test]
fn first_tick_shifts_the_starting_snake() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = GameConfig { initial_food: Some(GridPoint::new(15, 5)), ..Default::default() };
    let mut state = GameState::from_config(&config, &mut rng);
    assert_eq!(state.grid(), Grid::new(25, 15));
    assert_eq!(state.snake_segments(), row(0..5, 1));
    let pixels: Vec<_> = state.snake_segments().into_iter().map(Grid::to_pixels).collect();
    assert_eq!(pixels, vec![(0, 40), (40, 40), (80, 40), (120, 40), (160, 40)]);

    assert!(state.tick(None, &mut rng).is_empty());
    assert_eq!(state.snake_segments(), row(1..6, 1));
}

#[test]
fn eating_adjacent_food() {
    let mut rng = StdRng::seed_from_u64(2);
    let config = GameConfig { initial_food: Some(GridPoint::new(5, 1)), ..Default::default() };
    let mut state = GameState::from_config(&config, &mut rng);
    let mut cues = Cues::default();

    dispatch(&state.tick(None, &mut rng), &mut cues);
    assert_eq!(state.snake().len(), 6);
    assert_eq!(state.score(), 1);
    assert_eq!(cues.grow, 1);
    assert!(!state.snake_segments().contains(&state.food_position()));
}

#[test]
fn right_wall_crash_then_reset() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = GameConfig { initial_food: Some(GridPoint::new(0, 14)), ..Default::default() };
    let mut state = GameState::from_config(&config, &mut rng);
    let mut cues = Cues::default();

    // Head starts in column 4; column 24 is the last one.
    for _ in 0..20 {
        dispatch(&state.tick(None, &mut rng), &mut cues);
    }
    assert_eq!(state.snake().head(), GridPoint::new(24, 1));
    assert_eq!(state.phase(), Phase::Running);

    let events = state.tick(None, &mut rng);
    dispatch(&events, &mut cues);
    assert_eq!(events, vec![GameEvent::Crash, GameEvent::GameOver(GameOverReason::Wall)]);
    assert!(state.snake().collides_with_bounds(&state.grid()));
    assert_eq!(state.phase(), Phase::GameOver);

    for _ in 0..3 {
        dispatch(&state.tick(Some(Heading::Down), &mut rng), &mut cues);
    }
    assert_eq!(cues.crash, 1);
    assert_eq!(cues.game_over, 1);

    state.reset(&mut rng);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.snake().len(), Snake::DEFAULT_LENGTH);
    assert_eq!(state.playback_events().first(), Some(&PlaybackEvent::NewGame));
}

#[test]
fn headless_report_serializes() -> Result<()> {
    let config = GameConfig { seed: Some(0xC0FFEE), ..Default::default() };
    let script = parse_moves("D D D R R U")?;
    let report = HeadlessGame::new(&config).run(30, &script);
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["seed"], 0xC0FFEE);
    assert_eq!(json["score"], report.score);
    assert!(json["playback"].as_array().map_or(false, |log| !log.is_empty()));
    Ok(())
}

#[test]
fn config_file_round_trip() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("snake-arcade-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("config.json");
    std::fs::write(&path, r#"{ "screen_width": 480, "screen_height": 320, "initial_snake_length": 3 }"#)?;

    let config = GameConfig::from_json_file(&path)?;
    config.validate()?;
    assert_eq!(config.grid(), Grid::new(12, 8));

    let mut rng = StdRng::seed_from_u64(4);
    let state = GameState::from_config(&config, &mut rng);
    assert_eq!(state.snake_segments(), row(0..3, 1));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
