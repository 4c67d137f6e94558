//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling words game: word timing,
//! selection and scoring, round termination and the hall of fame. It has
//! **no dependencies** on terminal I/O; time, keyboard and display come in
//! through the [`Clock`], [`Input`] and [`Display`] capabilities.
//!
//! # Module Structure
//!
//! - [`word`]: a falling word with activation time and allowed duration
//! - [`word_bank`]: distinct random words from a line-oriented dictionary
//! - [`round`]: the active word set, selection and running score
//! - [`resolver`]: one typed character -> selection, hit or miss
//! - [`scoring`]: keystroke reward and miss penalty
//! - [`clock`]: clock capability and round termination checks
//! - [`scoreboard`]: top-3 leaderboard and its text store
//! - [`name_entry`]: the hall of fame name prompt buffer
//! - [`game_loop`]: ties the above together tick by tick
//!
//! # Example
//!
//! ```
//! use falling_words_core::{resolve, RoundState, Word};
//!
//! let mut round = RoundState::new(vec![
//!     Word::from_text("bala", 40, 2, 10).unwrap(),
//!     Word::from_text("bolo", 10, 5, 10).unwrap(),
//! ]);
//!
//! // Typing 'b' picks the word that activated first and consumes its 'b'.
//! resolve(&mut round, Some('b'), 6.0, 6.0);
//! assert_eq!(round.selected_word().unwrap().letters(), "ala");
//! assert_eq!(round.score(), 1);
//! ```

pub mod clock;
pub mod error;
pub mod game_loop;
pub mod name_entry;
pub mod resolver;
pub mod rng;
pub mod round;
pub mod scoreboard;
pub mod scoring;
pub mod snapshot;
pub mod word;
pub mod word_bank;

pub use falling_words_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, RoundClock, SystemClock};
pub use error::{GameError, Result};
pub use game_loop::{Display, GameLoop, Input, RoundReport};
pub use name_entry::{NameEntry, NameEntryStep};
pub use resolver::{find_selection, resolve, Resolution};
pub use rng::SimpleRng;
pub use round::RoundState;
pub use scoreboard::{Leaderboard, LeaderboardStore};
pub use scoring::{apply_miss_penalty, keystroke_points};
pub use snapshot::{RoundSnapshot, WordSnapshot};
pub use word::{Letters, Word};
pub use word_bank::{Dictionary, FileDictionary, WordBank};
