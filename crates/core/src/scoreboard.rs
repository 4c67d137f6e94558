//! Scoreboard - the top-3 hall of fame and its text store
//!
//! The board is kept in descending score order. A new score goes below every
//! entry it does not strictly beat, so ties keep the older entry on top.
//!
//! # Store format
//!
//! One entry per line, rank first:
//!
//! ```text
//! 1) Ana - 50 pontos
//! 2) Cid - 40 pontos
//! 3) Bo - 30 pontos
//! ```
//!
//! The store is always rewritten in full.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};
use crate::types::{Player, LEADERBOARD_CAPACITY};

const SCORE_SUFFIX: &str = " pontos";
const NAME_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<Player>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from entries already in rank order, dropping any beyond
    /// capacity.
    pub fn from_ranked(mut entries: Vec<Player>) -> Self {
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[Player] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= LEADERBOARD_CAPACITY
    }

    /// Whether `score` earns a place on the board.
    pub fn is_rank_worthy(&self, score: u32) -> bool {
        !self.is_full() || self.entries.iter().any(|p| score > p.score)
    }

    /// Index where `score` would be inserted.
    fn insertion_index(&self, score: u32) -> usize {
        let mut index = self.entries.len();
        while index > 0 && score > self.entries[index - 1].score {
            index -= 1;
        }
        index
    }

    /// Insert a new entry, dropping the lowest one if the board overflows.
    ///
    /// Returns the 0-based rank of the new entry, or `None` if it did not make
    /// the board.
    pub fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        let index = self.insertion_index(score);
        if index >= LEADERBOARD_CAPACITY {
            return None;
        }
        self.entries.insert(index, Player::new(name, score));
        self.entries.truncate(LEADERBOARD_CAPACITY);
        Some(index)
    }

    /// Parse the store text. Malformed lines are skipped; at most capacity
    /// entries are read.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(parse_line)
            .take(LEADERBOARD_CAPACITY)
            .collect();
        Self { entries }
    }

    /// One store line per entry, in rank order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, p)| format_line(i + 1, p))
    }

    /// Full store text, each line newline-terminated.
    pub fn to_store_text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Format one entry as `"<rank>) <name> - <score> pontos"`.
pub fn format_line(rank: usize, player: &Player) -> String {
    format!(
        "{}) {}{}{}{}",
        rank, player.name, NAME_SEPARATOR, player.score, SCORE_SUFFIX
    )
}

/// Parse one store line. Returns `None` for anything malformed.
pub fn parse_line(line: &str) -> Option<Player> {
    let line = line.trim_end();
    let (rank, rest) = line.split_once(')')?;
    rank.trim().parse::<usize>().ok()?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let rest = rest.strip_suffix(SCORE_SUFFIX)?;
    let (name, score) = match rest.rsplit_once(NAME_SEPARATOR) {
        Some(parts) => parts,
        // An empty name leaves "- <score>" behind.
        None => ("", rest.trim_start().strip_prefix("- ")?),
    };
    let score = score.trim().parse::<u32>().ok()?;
    Some(Player::new(name, score))
}

/// File-backed leaderboard store.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the board, creating an empty store if none exists yet.
    ///
    /// A store that still cannot be read after that is fatal.
    pub fn load(&self) -> Result<Leaderboard> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let board = Leaderboard::parse(&text);
                tracing::debug!(path = %self.path.display(), entries = board.len(), "leaderboard loaded");
                Ok(board)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "creating empty leaderboard store");
                File::create(&self.path).map_err(|source| self.unavailable(source))?;
                let text = fs::read_to_string(&self.path).map_err(|source| self.unavailable(source))?;
                Ok(Leaderboard::parse(&text))
            }
            Err(source) => Err(self.unavailable(source)),
        }
    }

    /// Rewrite the store with the whole board.
    pub fn save(&self, board: &Leaderboard) -> Result<()> {
        fs::write(&self.path, board.to_store_text())?;
        tracing::info!(path = %self.path.display(), entries = board.len(), "leaderboard saved");
        Ok(())
    }

    fn unavailable(&self, source: std::io::Error) -> GameError {
        GameError::LeaderboardUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}
