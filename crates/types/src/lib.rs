//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, so they
//! can be used from the engine, the terminal layer and the tests alike.
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WORD_COUNT` | 10 | Words sampled per round |
//! | `MAX_WORD_LETTERS` | 15 | Longest playable word |
//! | `SECONDS_PER_WORD` | 3 | Global round budget is `3 * word count` seconds |
//! | `MIN_ALLOWED_SECS` | 5 | Shortest per-word typing window |
//! | `MAX_ALLOWED_SECS` | 30 | Longest per-word typing window |
//! | `TICK_MS` | 16 | Input poll interval (~60 FPS) |
//!
//! # Scoring Constants
//!
//! - `MAX_KEYSTROKE_POINTS`: 100 points for a keystroke with zero gap
//! - `SLOW_KEYSTROKE_POINTS`: 1 point once the gap reaches one second
//! - `MISS_PENALTY`: 10 points deducted for a wrong letter (floored at 0)
//!
//! # Examples
//!
//! ```
//! use falling_words_types::{Key, Player, RoundOutcome, LEADERBOARD_CAPACITY};
//!
//! let player = Player::new("  Ana  ", 50);
//! assert_eq!(player.name, "Ana");
//!
//! assert!(RoundOutcome::Cleared.is_win());
//! assert!(!RoundOutcome::TimeUp.is_win());
//!
//! assert_eq!(Key::Enter.as_char(), Some('\n'));
//! assert_eq!(LEADERBOARD_CAPACITY, 3);
//! ```

/// Words sampled per round.
pub const WORD_COUNT: usize = 10;

/// Upper bound on letters in a single word.
pub const MAX_WORD_LETTERS: usize = 15;

/// Seconds of global round budget granted per word.
pub const SECONDS_PER_WORD: u32 = 3;

/// Activation times are drawn from `0..=ACTIVATION_SPREAD * word_count`.
pub const ACTIVATION_SPREAD: u32 = 2;

/// Shortest per-word typing window in seconds.
pub const MIN_ALLOWED_SECS: u32 = 5;

/// Longest per-word typing window in seconds.
pub const MAX_ALLOWED_SECS: u32 = 30;

/// Horizontal slots are percentages in `0..=MAX_HORIZONTAL_SLOT`.
pub const MAX_HORIZONTAL_SLOT: u8 = 100;

/// Points for a correct keystroke typed with no gap at all.
pub const MAX_KEYSTROKE_POINTS: u32 = 100;

/// Points for a correct keystroke typed a second or more after the last one.
pub const SLOW_KEYSTROKE_POINTS: u32 = 1;

/// Points deducted for a wrong letter.
pub const MISS_PENALTY: u32 = 10;

/// Number of entries kept in the hall of fame.
pub const LEADERBOARD_CAPACITY: usize = 3;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 29;

/// Input poll interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Global time budget, in seconds, for a round of `word_count` words.
pub const fn round_budget_secs(word_count: usize) -> u32 {
    SECONDS_PER_WORD * word_count as u32
}

/// A key press as seen by the game.
///
/// The terminal layer maps raw key events into this; everything else that is
/// not a printable character is dropped before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Backspace or Delete.
    Backspace,
    /// Ctrl-C. Ends the session from any screen.
    Interrupt,
}

impl Key {
    /// Character form of the key, as typed into the round.
    ///
    /// Enter and Backspace map to their control characters so that they count
    /// as (wrong) keystrokes while a word is selected.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(*c),
            Key::Enter => Some('\n'),
            Key::Backspace => Some('\u{7f}'),
            Key::Interrupt => None,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Every word was typed.
    Cleared,
    /// An active word ran past its allowed duration.
    WordExpired,
    /// The global round budget ran out.
    TimeUp,
    /// The player pressed Ctrl-C.
    Interrupted,
}

impl RoundOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Cleared)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Cleared => "cleared",
            RoundOutcome::WordExpired => "word_expired",
            RoundOutcome::TimeUp => "time_up",
            RoundOutcome::Interrupted => "interrupted",
        }
    }
}

/// One hall of fame entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    /// Create an entry, trimming the name and bounding it to [`MAX_NAME_LEN`].
    pub fn new(name: &str, score: u32) -> Self {
        let name: String = name.trim().chars().take(MAX_NAME_LEN).collect();
        Self {
            name: name.trim_end().to_string(),
            score,
        }
    }
}
