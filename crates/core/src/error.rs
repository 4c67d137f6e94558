//! Error types raised by the game engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the engine and its collaborators.
///
/// Only the dictionary and leaderboard variants are fatal at startup; normal
/// round endings are [`RoundOutcome`](crate::types::RoundOutcome)s, not errors.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("dictionary {path} is unavailable: {source}")]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary has {available} usable words, {needed} are required")]
    DictionaryTooSmall { needed: usize, available: usize },

    #[error("leaderboard store {path} cannot be read: {source}")]
    LeaderboardUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
