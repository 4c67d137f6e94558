//! Word bank - samples distinct words from a line-oriented dictionary
//!
//! Each dictionary line is a candidate. Sampling draws line indices uniformly
//! and rejects indices that were already drawn, so a round never shows the same
//! line twice. Only the leading ASCII letters of a line are kept (lowercased);
//! the first other character ends the word.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};
use crate::rng::SimpleRng;
use crate::word::Letters;

/// A source of candidate lines.
pub trait Dictionary {
    fn line_count(&self) -> usize;
    fn line(&self, index: usize) -> Option<&str>;
}

impl<S: AsRef<str>> Dictionary for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(|s| s.as_ref())
    }
}

impl<S: AsRef<str>> Dictionary for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(|s| s.as_ref())
    }
}

/// Dictionary loaded from a text file, one candidate per line.
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
    lines: Vec<String>,
}

impl FileDictionary {
    /// Read the whole file. A missing or unreadable file is fatal for the game.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| GameError::DictionaryUnavailable {
            path: path.clone(),
            source,
        })?;
        let lines = text.lines().map(str::to_owned).collect();
        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Dictionary for FileDictionary {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

/// Reduce a dictionary line to a playable word.
///
/// Returns `None` when the line has no leading letters or the word does not
/// fit in [`Letters`].
pub fn extract_letters(line: &str) -> Option<Letters> {
    let mut letters = Letters::new();
    for ch in line.chars() {
        if !ch.is_ascii_alphabetic() {
            break;
        }
        letters.try_push(ch.to_ascii_lowercase()).ok()?;
    }
    if letters.is_empty() {
        None
    } else {
        Some(letters)
    }
}

/// Samples words for a round.
#[derive(Debug, Clone)]
pub struct WordBank<D> {
    dictionary: D,
}

impl WordBank<FileDictionary> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let dictionary = FileDictionary::open(path)?;
        tracing::info!(
            path = %dictionary.path().display(),
            lines = dictionary.line_count(),
            "dictionary loaded"
        );
        Ok(Self::new(dictionary))
    }
}

impl<D: Dictionary> WordBank<D> {
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Number of lines that yield a playable word.
    pub fn usable_count(&self) -> usize {
        (0..self.dictionary.line_count())
            .filter(|&i| self.letters_at(i).is_some())
            .count()
    }

    /// Draw exactly `count` words from distinct lines.
    ///
    /// Duplicate indices are redrawn without bound. The usable-line check up
    /// front guarantees the loop can finish.
    pub fn sample(&self, count: usize, rng: &mut SimpleRng) -> Result<Vec<Letters>> {
        let available = self.usable_count();
        if available < count {
            return Err(GameError::DictionaryTooSmall {
                needed: count,
                available,
            });
        }

        let line_count = self.dictionary.line_count() as u32;
        let mut drawn: Vec<usize> = Vec::with_capacity(count);
        let mut words = Vec::with_capacity(count);

        while words.len() < count {
            let index = rng.next_range(line_count) as usize;
            if drawn.contains(&index) {
                continue;
            }
            drawn.push(index);

            if let Some(letters) = self.letters_at(index) {
                words.push(letters);
            }
        }

        tracing::debug!(count, draws = drawn.len(), "words sampled");
        Ok(words)
    }

    fn letters_at(&self, index: usize) -> Option<Letters> {
        self.dictionary.line(index).and_then(extract_letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_keeps_leading_letters_lowercased() {
        assert_eq!(extract_letters("Casa").unwrap().as_str(), "casa");
        assert_eq!(extract_letters("well-known").unwrap().as_str(), "well");
        assert_eq!(extract_letters("café").unwrap().as_str(), "caf");
        assert_eq!(extract_letters("dog\r").unwrap().as_str(), "dog");
    }

    #[test]
    fn extract_rejects_empty_and_oversized() {
        assert!(extract_letters("").is_none());
        assert!(extract_letters("-dash").is_none());
        assert!(extract_letters("1984").is_none());
        assert!(extract_letters("abcdefghijklmnopqrstuvwxyz").is_none());
    }

    #[test]
    fn sample_returns_exact_count_from_distinct_lines() {
        let lines: Vec<String> = (0..40u8)
            .map(|i| format!("{}{}x", (b'a' + i / 26) as char, (b'a' + i % 26) as char))
            .collect();
        let bank = WordBank::new(lines);
        let mut rng = SimpleRng::new(42);

        let words = bank.sample(10, &mut rng).unwrap();
        assert_eq!(words.len(), 10);

        let mut sorted: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
    }

    #[test]
    fn sample_can_take_every_usable_line() {
        let bank = WordBank::new(vec!["one", "two", "---", "three"]);
        let mut rng = SimpleRng::new(5);

        let mut words: Vec<String> = bank
            .sample(3, &mut rng)
            .unwrap()
            .iter()
            .map(|w| w.to_string())
            .collect();
        words.sort();
        assert_eq!(words, vec!["one", "three", "two"]);
    }

    #[test]
    fn sample_reports_small_dictionary() {
        let bank = WordBank::new(vec!["one", "two"]);
        let mut rng = SimpleRng::new(5);

        let err = bank.sample(3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::DictionaryTooSmall {
                needed: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordBank::open(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, GameError::DictionaryUnavailable { .. }));
    }

    #[test]
    fn file_dictionary_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palavras");
        fs::write(&path, "Abacate\nbola\ncasa\n").unwrap();

        let bank = WordBank::open(&path).unwrap();
        assert_eq!(bank.dictionary().line_count(), 3);
        assert_eq!(bank.usable_count(), 3);
    }
}
