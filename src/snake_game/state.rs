use log::{debug, info, warn};
use rand::Rng;
use serde::{Serialize, Deserialize};

use super::config::GameConfig;
use super::events::{GameEvent, GameOverReason, PlaybackEvent};
use super::food::Food;
use super::grid::{Grid, GridPoint, Heading};
use super::snake::Snake;

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Phase {
    Running,
    GameOver,
}

#[derive(Clone, Serialize, Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    phase: Phase,
    game_over_reason: Option<GameOverReason>,
    initial_snake_length: usize,
    initial_food: Option<GridPoint>,
    playback_events: Vec<PlaybackEvent>,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        Self::start(grid, Snake::DEFAULT_LENGTH, None, rng)
    }

    pub fn from_config<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        Self::start(config.grid(), config.initial_snake_length, config.initial_food, rng)
    }

    fn start<R: Rng + ?Sized>(
        grid: Grid,
        initial_snake_length: usize,
        initial_food: Option<GridPoint>,
        rng: &mut R,
    ) -> Self {
        let snake = Snake::new(&grid, initial_snake_length);
        if snake.len() != initial_snake_length {
            warn!("snake length {initial_snake_length} does not fit a {}x{} grid, using {}",
                grid.width, grid.height, snake.len());
        }
        let mut state = Self {
            grid,
            snake,
            food: Food::at(GridPoint::default()),
            score: 0,
            phase: Phase::Running,
            game_over_reason: None,
            initial_snake_length,
            initial_food,
            playback_events: Vec::with_capacity(256),
        };
        state.playback_events.push(PlaybackEvent::NewGame);
        state.place_initial_food(rng);
        state
    }

    fn place_initial_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(pt) = self.initial_food {
            if self.grid.is_in_bounds(pt) && !self.snake.occupies(pt) {
                self.food = Food::at(pt);
                self.playback_events.push(PlaybackEvent::NewFoodLocation(pt));
                return;
            }
            warn!("initial food {pt} is off the grid or under the snake, placing randomly");
        }
        if self.relocate_food(rng).is_none() {
            // Nothing emitted: there was no running game to end.
            self.end(GameOverReason::GridExhausted);
        }
    }

    /// Moves the food off the snake; `None` when the grid is full.
    fn relocate_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<GridPoint> {
        match self.food.place(self.snake.segments(), &self.grid, rng) {
            Ok(()) => {
                let pt = self.food.position();
                self.playback_events.push(PlaybackEvent::NewFoodLocation(pt));
                Some(pt)
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    fn end(&mut self, reason: GameOverReason) {
        info!("game over ({reason:?}) with score {}", self.score);
        self.phase = Phase::GameOver;
        self.game_over_reason = Some(reason);
        self.playback_events.push(PlaybackEvent::GameOver(reason));
    }

    /// Advances the game one step and returns the cues it produced. Does
    /// nothing once the game is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, input: Option<Heading>, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::Running { return events; }

        if let Some(heading) = input {
            self.snake.set_heading(heading);
        }
        self.playback_events.push(PlaybackEvent::MoveSnake(self.snake.heading()));

        // Growth decides whether the tail stays, so settle it before moving.
        let grow = self.snake.prospective_head() == self.food.position();
        if grow {
            self.score += 1;
        }
        self.snake.advance(grow);

        if grow {
            debug!("ate food at {}, length now {}", self.snake.head(), self.snake.len());
            events.push(GameEvent::Grow);
            self.playback_events.push(PlaybackEvent::Grow);
            if self.relocate_food(rng).is_none() {
                self.end(GameOverReason::GridExhausted);
                events.push(GameEvent::GameOver(GameOverReason::GridExhausted));
                return events;
            }
        }

        let crash = if self.snake.collides_with_bounds(&self.grid) {
            Some(GameOverReason::Wall)
        } else if self.snake.collides_with_self() {
            Some(GameOverReason::SelfCollision)
        } else {
            None
        };
        if let Some(reason) = crash {
            self.end(reason);
            events.push(GameEvent::Crash);
            events.push(GameEvent::GameOver(reason));
        }
        events
    }

    /// Starts over with a fresh snake and food, whatever the phase.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        info!("reset after score {}", self.score);
        *self = Self::start(self.grid, self.initial_snake_length, self.initial_food, rng);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Tail to head, the order segments are drawn in.
    pub fn snake_segments(&self) -> Vec<GridPoint> {
        self.snake.segments().collect()
    }

    /// Always off the snake, except after a `GridExhausted` game over: the
    /// last food eaten had no free cell to move to and stays under the head.
    pub fn food_position(&self) -> GridPoint {
        self.food.position()
    }

    pub fn playback_events(&self) -> &[PlaybackEvent] {
        &self.playback_events
    }

    #[cfg(test)]
    pub(crate) fn with_parts(grid: Grid, snake: Snake, food: GridPoint) -> Self {
        Self {
            grid,
            initial_snake_length: snake.len(),
            snake,
            food: Food::at(food),
            score: 0,
            phase: Phase::Running,
            game_over_reason: None,
            initial_food: None,
            playback_events: vec![PlaybackEvent::NewGame],
        }
    }
}
