//! Non-blocking keyboard reader backed by crossterm events.

use std::time::Duration;

use crossterm::event::{self, Event};

use crate::core::{Input, Result};
use crate::map::map_key_event;
use crate::types::{Key, TICK_MS};

/// Reads at most one key per call, waiting no longer than the poll timeout.
///
/// The timeout doubles as the tick pacing of the game loop: a call returns as
/// soon as a key arrives, or after `poll_timeout` with `None`.
#[derive(Debug, Clone, Copy)]
pub struct TerminalInput {
    poll_timeout: Duration,
}

impl TerminalInput {
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

impl Input for TerminalInput {
    fn read_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}
