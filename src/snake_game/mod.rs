//! Engine-free game core: grid, snake, food and the tick state machine.
//!
//! Nothing in here knows about windows, sound or input devices. The driving
//! loop calls [`GameState::tick`] on a fixed cadence, reacts to the returned
//! [`GameEvent`]s and reads the state back to draw it.

pub mod config;
pub mod events;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use events::{dispatch, GameEvent, GameObserver, GameOverReason, PlaybackEvent};
pub use food::{Food, GridExhausted};
pub use grid::{Grid, GridPoint, Heading, HeadingParseError};
pub use snake::Snake;
pub use state::{GameState, Phase};
