//! Plays the game without a window: a scripted list of headings drives a
//! fixed number of ticks and the outcome is summarised in a [`RunReport`].

use std::fmt;

use chrono::Utc;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::snake_game::{
    GameConfig, GameObserver, GameOverReason, GameState, GridPoint, Heading, HeadingParseError,
    Phase, PlaybackEvent,
};

/// One entry per tick. `.` means "no input", separators are skipped.
pub fn parse_moves(script: &str) -> Result<Vec<Option<Heading>>, HeadingParseError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '.' | '_' => Ok(None),
            c => c.to_string().parse::<Heading>().map(Some),
        })
        .collect()
}

#[derive(Default, Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CueCounts {
    pub grow: usize,
    pub crash: usize,
    pub game_over: usize,
}

impl GameObserver for CueCounts {
    fn on_grow(&mut self) { self.grow += 1; }
    fn on_crash(&mut self) { self.crash += 1; }
    fn on_game_over(&mut self, _reason: GameOverReason) { self.game_over += 1; }
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub ticks_requested: usize,
    pub ticks_played: usize,
    pub score: u32,
    pub phase: Phase,
    pub game_over_reason: Option<GameOverReason>,
    pub snake_length: usize,
    pub food: GridPoint,
    pub cues: CueCounts,
    pub finished_at: String,
    pub playback: Vec<PlaybackEvent>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score={} phase={:?}", self.score, self.phase)?;
        if let Some(reason) = self.game_over_reason {
            write!(f, " reason={reason:?}")?;
        }
        write!(f, " ticks={}/{} length={} seed={}",
            self.ticks_played, self.ticks_requested, self.snake_length, self.seed)
    }
}

pub struct HeadlessGame {
    state: GameState,
    rng: StdRng,
    seed: u64,
    cues: CueCounts,
}

impl HeadlessGame {
    /// Without a configured seed a random one is drawn, so every run can be
    /// reproduced from its report.
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::from_config(config, &mut rng);
        Self { state, rng, seed, cues: CueCounts::default() }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs up to `ticks` steps, feeding `script` in order and no input once it
    /// runs out. Stops early when the game ends.
    pub fn run(&mut self, ticks: usize, script: &[Option<Heading>]) -> RunReport {
        let mut played = 0;
        let inputs = script.iter().copied().chain(std::iter::repeat(None));
        for input in inputs.take(ticks) {
            if !self.state.is_running() { break; }
            let events = self.state.tick(input, &mut self.rng);
            crate::snake_game::dispatch(&events, &mut self.cues);
            played += 1;
        }
        info!("headless run finished after {played} tick(s), score {}", self.state.score());
        self.report(ticks, played)
    }

    fn report(&self, ticks_requested: usize, ticks_played: usize) -> RunReport {
        RunReport {
            seed: self.seed,
            ticks_requested,
            ticks_played,
            score: self.state.score(),
            phase: self.state.phase(),
            game_over_reason: self.state.game_over_reason(),
            snake_length: self.state.snake().len(),
            food: self.state.food_position(),
            cues: self.cues,
            finished_at: Utc::now().to_rfc3339(),
            playback: self.state.playback_events().to_vec(),
        }
    }
}
