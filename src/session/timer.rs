//! The countdown timer.
//!
//! The host schedules one tick per real second and hands back the
//! [`TimerToken`] it was given. Stopping the timer bumps its generation, so a
//! tick scheduled before a reset or a terminal transition is ignored.

use serde::{Deserialize, Serialize};

/// Proof that a tick was scheduled for a particular run of the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Seconds-remaining countdown with cancellation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    time_left: u32,
    running: bool,
    generation: u64,
}

impl Timer {
    /// A dormant timer showing `time_limit`.
    #[must_use]
    pub const fn new(time_limit: u32) -> Self {
        Self { time_left: time_limit, running: false, generation: 0 }
    }

    /// Start counting down from `time_limit`.
    pub fn start(&mut self, time_limit: u32) -> TimerToken {
        self.time_left = time_limit;
        self.running = true;
        self.token_unchecked()
    }

    /// Stop the timer and invalidate every outstanding token.
    pub fn stop(&mut self) {
        self.running = false;
        self.generation += 1;
    }

    /// Stop and rewind to `time_limit`.
    pub fn reset(&mut self, time_limit: u32) {
        self.stop();
        self.time_left = time_limit;
    }

    /// Token for the next tick, while running.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.running.then(|| self.token_unchecked())
    }

    /// Whether a tick carrying `token` should be applied.
    #[must_use]
    pub fn accepts(&self, token: TimerToken) -> bool {
        self.running && token.generation == self.generation
    }

    /// Count down one second. Returns the seconds left.
    pub fn tick(&mut self) -> u32 {
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left
    }

    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    const fn token_unchecked(&self) -> TimerToken {
        TimerToken { generation: self.generation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dormant_until_started() {
        let mut timer = Timer::new(60);
        assert_eq!(timer.time_left(), 60);
        assert!(timer.token().is_none());

        let token = timer.start(60);
        assert!(timer.accepts(token));
        assert_eq!(timer.tick(), 59);
    }

    #[test]
    fn test_stop_invalidates_tokens() {
        let mut timer = Timer::new(10);
        let stale = timer.start(10);
        timer.reset(10);
        let fresh = timer.start(10);

        assert_ne!(stale, fresh);
        assert!(!timer.accepts(stale));
        assert!(timer.accepts(fresh));

        timer.stop();
        assert!(!timer.accepts(fresh));
    }

    #[test]
    fn test_tick_saturates() {
        let mut timer = Timer::new(1);
        timer.start(1);
        assert_eq!(timer.tick(), 0);
        assert_eq!(timer.tick(), 0);
    }
}
