//! Round timing - clock capability and round termination checks

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::round::RoundState;
use crate::types::{round_budget_secs, RoundOutcome};

/// Source of time in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Monotonic clock counting seconds since it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and replays. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Elapsed time and end-of-round checks for one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundClock {
    start: f64,
    budget_secs: u32,
}

impl RoundClock {
    /// Start a round of `word_count` words at clock time `now`.
    pub fn start(now: f64, word_count: usize) -> Self {
        Self {
            start: now,
            budget_secs: round_budget_secs(word_count),
        }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start
    }

    pub fn budget_secs(&self) -> u32 {
        self.budget_secs
    }

    /// Seconds left in the global budget, never negative.
    pub fn remaining(&self, now: f64) -> f64 {
        (self.budget_secs as f64 - self.elapsed(now)).max(0.0)
    }

    /// Decide whether the round is over at `now`.
    ///
    /// Checked in order: an expired word, an empty word set, the global budget.
    pub fn evaluate(&self, round: &RoundState, now: f64) -> Option<RoundOutcome> {
        let elapsed = self.elapsed(now);

        if round.words().iter().any(|w| w.is_expired(elapsed)) {
            return Some(RoundOutcome::WordExpired);
        }
        if round.remaining() == 0 {
            return Some(RoundOutcome::Cleared);
        }
        if elapsed >= self.budget_secs as f64 {
            return Some(RoundOutcome::TimeUp);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn round_of(words: &[(&str, u32, u32)]) -> RoundState {
        RoundState::new(
            words
                .iter()
                .map(|&(t, a, d)| Word::from_text(t, 0, a, d).unwrap())
                .collect(),
        )
    }

    #[test]
    fn elapsed_is_relative_to_start() {
        let rc = RoundClock::start(100.0, 10);
        assert_eq!(rc.elapsed(112.5), 12.5);
        assert_eq!(rc.budget_secs(), 30);
        assert_eq!(rc.remaining(112.5), 17.5);
        assert_eq!(rc.remaining(200.0), 0.0);
    }

    #[test]
    fn running_round_has_no_outcome() {
        let round = round_of(&[("cat", 0, 10), ("dog", 3, 10)]);
        let rc = RoundClock::start(0.0, 2);
        assert_eq!(rc.evaluate(&round, 2.0), None);
    }

    #[test]
    fn expiry_takes_precedence_over_time_budget() {
        let round = round_of(&[("cat", 0, 5)]);
        let rc = RoundClock::start(0.0, 1);
        // Budget is 3s, the word expired at 5s: both conditions hold.
        assert_eq!(rc.evaluate(&round, 10.0), Some(RoundOutcome::WordExpired));
    }

    #[test]
    fn inactive_word_does_not_expire() {
        let round = round_of(&[("cat", 20, 5), ("dog", 0, 30)]);
        let rc = RoundClock::start(0.0, 10);
        assert_eq!(rc.evaluate(&round, 15.0), None);
    }

    #[test]
    fn empty_round_is_cleared() {
        let round = RoundState::new(Vec::new());
        let rc = RoundClock::start(0.0, 3);
        assert_eq!(rc.evaluate(&round, 100.0), Some(RoundOutcome::Cleared));
    }

    #[test]
    fn budget_exhaustion_is_time_up() {
        let round = round_of(&[("cat", 0, 30), ("dog", 0, 30)]);
        let rc = RoundClock::start(0.0, 2);
        assert_eq!(rc.evaluate(&round, 5.9), None);
        assert_eq!(rc.evaluate(&round, 6.0), Some(RoundOutcome::TimeUp));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1.0);
        let other = clock.clone();
        clock.advance(0.5);
        assert_eq!(other.now(), 1.5);
        other.set(9.0);
        assert_eq!(clock.now(), 9.0);
    }
}
