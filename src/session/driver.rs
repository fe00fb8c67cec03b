//! Single-threaded input queue.
//!
//! Intents and timer ticks are queued and applied strictly one at a time,
//! so a tick can never land in the middle of resolving an action.

use std::collections::VecDeque;

use crate::core::{Difficulty, GameConfig};
use crate::error::Result;
use crate::events::GameEvent;

use super::intent::{ActionError, Intent};
use super::machine::Session;
use super::store::BestTimeStore;
use super::timer::TimerToken;

/// One queued input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Intent(Intent),
    Tick(TimerToken),
}

/// A session plus its input queue and best-time store.
#[derive(Debug)]
pub struct Game<S> {
    session: Session,
    store: S,
    queue: VecDeque<Input>,
    rejections: Vec<ActionError>,
}

impl<S: BestTimeStore> Game<S> {
    /// Build a game, loading the best time from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the store cannot
    /// be read.
    pub fn new(config: GameConfig, difficulty: Difficulty, seed: u64, mut store: S) -> Result<Self> {
        let best_time = store.load()?;
        let session = Session::new(config, difficulty, seed)?.with_best_time(best_time);
        Ok(Self {
            session,
            store,
            queue: VecDeque::new(),
            rejections: Vec::new(),
        })
    }

    /// Queue an intent.
    pub fn submit(&mut self, intent: Intent) {
        self.queue.push_back(Input::Intent(intent));
    }

    /// Queue a timer tick.
    pub fn submit_tick(&mut self, token: TimerToken) {
        self.queue.push_back(Input::Tick(token));
    }

    /// Queue any input.
    pub fn push(&mut self, input: Input) {
        self.queue.push_back(input);
    }

    /// Number of inputs waiting.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued input in order and return the events they produced.
    ///
    /// A new best time is written to the store as it is announced; a failed
    /// write is logged and otherwise ignored.
    pub fn pump(&mut self) -> Vec<GameEvent> {
        while let Some(input) = self.queue.pop_front() {
            match input {
                Input::Intent(intent) => {
                    if let Err(rejection) = self.session.apply(intent) {
                        tracing::debug!(?intent, %rejection, "intent rejected");
                        self.rejections.push(rejection);
                    }
                }
                Input::Tick(token) => {
                    self.session.tick(token);
                }
            }
        }

        let events = self.session.drain_events();
        for event in &events {
            if let GameEvent::GameWon { elapsed_seconds, is_new_record: true } = *event {
                if let Err(error) = self.store.save(elapsed_seconds) {
                    tracing::warn!(%error, elapsed_seconds, "failed to persist best time");
                }
            }
        }
        events
    }

    /// Rejections collected by [`pump`](Self::pump) since the last call.
    pub fn take_rejections(&mut self) -> Vec<ActionError> {
        std::mem::take(&mut self.rejections)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::session::{MemoryStore, SessionState};

    #[test]
    fn test_inputs_apply_in_order() {
        let mut game = Game::new(GameConfig::default(), Difficulty::Easy, 11, MemoryStore::default()).unwrap();
        game.submit(Intent::Mine);
        game.submit(Intent::Reset);
        assert_eq!(game.queued(), 2);

        let events = game.pump();
        assert_eq!(game.queued(), 0);
        assert!(matches!(events.first(), Some(GameEvent::TimerStarted { time_limit: 180 })));
        assert!(matches!(events.last(), Some(GameEvent::SessionReset { .. })));
        assert_eq!(game.session().state(), SessionState::NotStarted);
    }

    #[test]
    fn test_rejections_are_collected() {
        let mut game = Game::new(GameConfig::default(), Difficulty::Easy, 11, MemoryStore::default()).unwrap();
        game.submit(Intent::Place(Direction::Up));
        game.pump();
        assert_eq!(game.take_rejections().len(), 1);
        assert!(game.take_rejections().is_empty());
    }
}
