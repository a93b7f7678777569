use serde::{Serialize, Deserialize};

use super::grid::{GridPoint, Heading};

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    GridExhausted,
}

/// Cues a tick hands back to whoever drives the loop. Each fires once, on
/// the transition that caused it.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum GameEvent {
    Grow,
    Crash,
    GameOver(GameOverReason),
}

impl GameEvent {
    pub fn notify<O: GameObserver + ?Sized>(self, observer: &mut O) {
        match self {
            GameEvent::Grow => observer.on_grow(),
            GameEvent::Crash => observer.on_crash(),
            GameEvent::GameOver(reason) => observer.on_game_over(reason),
        }
    }
}

/// Presentation side of the game: sound, flashes, score screens.
pub trait GameObserver {
    fn on_grow(&mut self) {}
    fn on_crash(&mut self) {}
    fn on_game_over(&mut self, _reason: GameOverReason) {}
}

pub fn dispatch<O: GameObserver + ?Sized>(events: &[GameEvent], observer: &mut O) {
    for event in events {
        event.notify(observer);
    }
}

/// Enough to replay a game without the RNG.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum PlaybackEvent {
    NewGame,
    NewFoodLocation(GridPoint),
    MoveSnake(Heading),
    Grow,
    GameOver(GameOverReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        grows: usize,
        crashes: usize,
        over: Vec<GameOverReason>,
    }

    impl GameObserver for Tally {
        fn on_grow(&mut self) { self.grows += 1; }
        fn on_crash(&mut self) { self.crashes += 1; }
        fn on_game_over(&mut self, reason: GameOverReason) { self.over.push(reason); }
    }

    #[test]
    fn dispatch_routes_each_event_once() {
        let mut tally = Tally::default();
        dispatch(&[GameEvent::Grow, GameEvent::Crash, GameEvent::GameOver(GameOverReason::Wall)], &mut tally);
        assert_eq!(tally.grows, 1);
        assert_eq!(tally.crashes, 1);
        assert_eq!(tally.over, vec![GameOverReason::Wall]);
    }

    #[test]
    fn observer_methods_default_to_nothing() {
        struct Deaf;
        impl GameObserver for Deaf {}
        dispatch(&[GameEvent::Grow, GameEvent::Crash], &mut Deaf);
    }
}
