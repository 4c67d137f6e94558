//! Word module - a single falling word and its timing model
//!
//! A word is invisible until its activation time. From then on it falls for
//! `allowed_duration` seconds; once elapsed time passes
//! `activation_time + allowed_duration` the word has expired and the round is
//! lost.

use arrayvec::ArrayString;

use crate::rng::SimpleRng;
use crate::types::{
    ACTIVATION_SPREAD, MAX_ALLOWED_SECS, MAX_HORIZONTAL_SLOT, MAX_WORD_LETTERS, MIN_ALLOWED_SECS,
};

/// Bounded letter buffer for one word.
pub type Letters = ArrayString<MAX_WORD_LETTERS>;

/// One falling word instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Letters,
    horizontal_slot: u8,
    activation_time: u32,
    allowed_duration: u32,
}

impl Word {
    /// Create a word with explicit timing.
    ///
    /// The slot is clamped to `0..=100`.
    pub fn new(
        letters: Letters,
        horizontal_slot: u8,
        activation_time: u32,
        allowed_duration: u32,
    ) -> Self {
        Self {
            letters,
            horizontal_slot: horizontal_slot.min(MAX_HORIZONTAL_SLOT),
            activation_time,
            allowed_duration,
        }
    }

    /// Convenience constructor from text. Returns `None` if the text does not
    /// fit in [`Letters`].
    pub fn from_text(
        text: &str,
        horizontal_slot: u8,
        activation_time: u32,
        allowed_duration: u32,
    ) -> Option<Self> {
        let letters = Letters::from(text).ok()?;
        Some(Self::new(
            letters,
            horizontal_slot,
            activation_time,
            allowed_duration,
        ))
    }

    /// Create a word with randomized slot, activation time and duration for a
    /// round of `word_count` words.
    pub fn spawn(letters: Letters, word_count: usize, rng: &mut SimpleRng) -> Self {
        let horizontal_slot = rng.next_inclusive(0, MAX_HORIZONTAL_SLOT as u32) as u8;
        let activation_time = rng.next_inclusive(0, ACTIVATION_SPREAD * word_count as u32);
        let allowed_duration = rng.next_inclusive(MIN_ALLOWED_SECS, MAX_ALLOWED_SECS);
        Self::new(letters, horizontal_slot, activation_time, allowed_duration)
    }

    pub fn letters(&self) -> &str {
        self.letters.as_str()
    }

    pub fn first_letter(&self) -> Option<char> {
        self.letters.chars().next()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn horizontal_slot(&self) -> u8 {
        self.horizontal_slot
    }

    pub fn activation_time(&self) -> u32 {
        self.activation_time
    }

    pub fn allowed_duration(&self) -> u32 {
        self.allowed_duration
    }

    /// Elapsed round time after which the word expires.
    pub fn deadline(&self) -> u32 {
        self.activation_time.saturating_add(self.allowed_duration)
    }

    /// Whether the word is visible and can be selected at `elapsed` seconds.
    pub fn is_selectable(&self, elapsed: f64) -> bool {
        self.activation_time as f64 <= elapsed
    }

    /// Whether the word has run out of time at `elapsed` seconds.
    ///
    /// Inactive words never expire.
    pub fn is_expired(&self, elapsed: f64) -> bool {
        elapsed >= self.activation_time as f64 && elapsed > self.deadline() as f64
    }

    /// Whole seconds the word has been active, or `None` if not yet active.
    pub fn active_secs(&self, elapsed: f64) -> Option<u32> {
        if !self.is_selectable(elapsed) {
            return None;
        }
        Some((elapsed - self.activation_time as f64) as u32)
    }

    /// Drop the first letter. No-op on a complete word.
    pub fn advance(&mut self) -> Option<char> {
        if self.letters.is_empty() {
            return None;
        }
        Some(self.letters.remove(0))
    }

    pub fn is_complete(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, activation: u32, allowed: u32) -> Word {
        Word::from_text(text, 50, activation, allowed).unwrap()
    }

    #[test]
    fn advance_shifts_left_until_complete() {
        let mut w = word("cat", 0, 10);
        assert!(!w.is_complete());

        assert_eq!(w.advance(), Some('c'));
        assert_eq!(w.letters(), "at");
        assert!(!w.is_complete());

        assert_eq!(w.advance(), Some('a'));
        assert_eq!(w.letters(), "t");
        assert!(!w.is_complete());

        assert_eq!(w.advance(), Some('t'));
        assert_eq!(w.letters(), "");
        assert!(w.is_complete());

        assert_eq!(w.advance(), None);
    }

    #[test]
    fn selectable_only_after_activation() {
        let w = word("dog", 4, 10);
        assert!(!w.is_selectable(0.0));
        assert!(!w.is_selectable(3.99));
        assert!(w.is_selectable(4.0));
        assert!(w.is_selectable(100.0));
    }

    #[test]
    fn expires_only_after_deadline() {
        let w = word("dog", 4, 10);
        assert!(!w.is_expired(0.0));
        assert!(!w.is_expired(4.0));
        assert!(!w.is_expired(14.0));
        assert!(w.is_expired(14.01));
        assert!(w.is_expired(20.0));
    }

    #[test]
    fn active_secs_truncates() {
        let w = word("dog", 2, 10);
        assert_eq!(w.active_secs(1.5), None);
        assert_eq!(w.active_secs(2.0), Some(0));
        assert_eq!(w.active_secs(5.9), Some(3));
    }

    #[test]
    fn spawn_stays_in_ranges() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..500 {
            let w = Word::spawn(Letters::from("abc").unwrap(), 10, &mut rng);
            assert!(w.horizontal_slot() <= 100);
            assert!(w.activation_time() <= 20);
            assert!((5..=30).contains(&w.allowed_duration()));
        }
    }

    #[test]
    fn slot_is_clamped() {
        let w = Word::from_text("a", 250, 0, 5).unwrap();
        assert_eq!(w.horizontal_slot(), 100);
    }

    #[test]
    fn oversized_text_is_rejected() {
        assert!(Word::from_text("abcdefghijklmnopqrstuvwxyz", 0, 0, 5).is_none());
    }
}
