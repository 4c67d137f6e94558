//! Game loop - drives one round tick by tick
//!
//! Each tick:
//! 1. The round clock checks for an expired word, an empty word set, or an
//!    exhausted budget (in that order). Any of these ends the round.
//! 2. One key is read without blocking and handed to the resolver.
//! 3. The current snapshot is drawn.
//!
//! Input, display and time are capabilities so the loop runs the same against
//! a terminal or a scripted test harness.

use crate::clock::{Clock, RoundClock};
use crate::error::Result;
use crate::resolver::{resolve, Resolution};
use crate::round::RoundState;
use crate::snapshot::RoundSnapshot;
use crate::types::{Key, RoundOutcome};

/// Keyboard capability.
pub trait Input {
    /// Read one key if available. `Ok(None)` means no key this tick.
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Read one key as a character.
    fn read_char(&mut self) -> Result<Option<char>> {
        Ok(self.read_key()?.and_then(|k| k.as_char()))
    }

    /// Block until a key arrives.
    fn wait_key(&mut self) -> Result<Key> {
        loop {
            if let Some(key) = self.read_key()? {
                return Ok(key);
            }
        }
    }
}

/// Render sink for round frames.
pub trait Display {
    fn draw(&mut self, frame: &RoundSnapshot) -> Result<()>;
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub score: u32,
    pub words_left: usize,
    pub elapsed: f64,
}

pub struct GameLoop<C, I, D> {
    clock: C,
    input: I,
    display: D,
    frame: RoundSnapshot,
}

impl<C: Clock, I: Input, D: Display> GameLoop<C, I, D> {
    pub fn new(clock: C, input: I, display: D) -> Self {
        Self {
            clock,
            input,
            display,
            frame: RoundSnapshot::default(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_parts(self) -> (C, I, D) {
        (self.clock, self.input, self.display)
    }

    /// Play `round` until it ends.
    pub fn run_round(&mut self, round: &mut RoundState) -> Result<RoundReport> {
        let round_clock = RoundClock::start(self.clock.now(), round.total_words());
        tracing::info!(
            words = round.total_words(),
            budget_secs = round_clock.budget_secs(),
            "round started"
        );

        loop {
            if let Some(outcome) = self.tick(round, &round_clock)? {
                let report = RoundReport {
                    outcome,
                    score: round.score(),
                    words_left: round.remaining(),
                    elapsed: round_clock.elapsed(self.clock.now()),
                };
                tracing::info!(
                    outcome = outcome.as_str(),
                    score = report.score,
                    words_left = report.words_left,
                    elapsed = report.elapsed,
                    "round finished"
                );
                return Ok(report);
            }
        }
    }

    /// Run a single tick. Returns the outcome if the round is over.
    pub fn tick(
        &mut self,
        round: &mut RoundState,
        round_clock: &RoundClock,
    ) -> Result<Option<RoundOutcome>> {
        if let Some(outcome) = round_clock.evaluate(round, self.clock.now()) {
            return Ok(Some(outcome));
        }

        let key = self.input.read_key()?;
        if key == Some(Key::Interrupt) {
            return Ok(Some(RoundOutcome::Interrupted));
        }

        let now = self.clock.now();
        let elapsed = round_clock.elapsed(now);
        match resolve(round, key.and_then(|k| k.as_char()), now, elapsed) {
            Resolution::Hit { points, completed } => {
                tracing::trace!(points, completed, score = round.score(), "hit");
            }
            Resolution::Miss { deducted } => {
                tracing::trace!(deducted, score = round.score(), "miss");
            }
            Resolution::Idle | Resolution::Unmatched => {}
        }

        round.snapshot_into(elapsed, round_clock.remaining(now), &mut self.frame);
        self.display.draw(&self.frame)?;
        Ok(None)
    }
}
