//! Round state - the active word set, selection pointer and running score
//!
//! Word order matters: removal is stable, and selection ties between words
//! with the same activation time go to the one that comes first.

use crate::rng::SimpleRng;
use crate::snapshot::{RoundSnapshot, WordSnapshot};
use crate::word::{Letters, Word};

#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    words: Vec<Word>,
    selected: Option<usize>,
    score: u32,
    /// Clock time of the previous hit or miss. Starts at zero, so the first
    /// keystroke of a round is measured against clock time zero.
    last_keystroke: f64,
    total_words: usize,
}

impl RoundState {
    pub fn new(words: Vec<Word>) -> Self {
        let total_words = words.len();
        Self {
            words,
            selected: None,
            score: 0,
            last_keystroke: 0.0,
            total_words,
        }
    }

    /// Build a round from sampled words, randomizing each word's placement
    /// and timing.
    pub fn generate(letters: Vec<Letters>, rng: &mut SimpleRng) -> Self {
        let count = letters.len();
        let words = letters
            .into_iter()
            .map(|l| Word::spawn(l, count, rng))
            .collect();
        Self::new(words)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Live word count.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    /// Words the round started with.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_word(&self) -> Option<&Word> {
        self.selected.and_then(|i| self.words.get(i))
    }

    pub(crate) fn selected_word_mut(&mut self) -> Option<&mut Word> {
        self.selected.and_then(|i| self.words.get_mut(i))
    }

    pub(crate) fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected.filter(|&i| i < self.words.len());
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn last_keystroke(&self) -> f64 {
        self.last_keystroke
    }

    pub(crate) fn set_last_keystroke(&mut self, now: f64) {
        self.last_keystroke = now;
    }

    /// Remove the word at `index`, keeping the others in order.
    ///
    /// The selection is cleared if it pointed at the removed word and shifted
    /// down if it pointed past it.
    pub fn remove(&mut self, index: usize) -> Option<Word> {
        if index >= self.words.len() {
            return None;
        }
        let word = self.words.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(word)
    }

    /// Fill `out` with the frame for `elapsed` seconds into the round.
    ///
    /// The selected word is reported separately and left out of `visible`.
    pub fn snapshot_into(&self, elapsed: f64, remaining_secs: f64, out: &mut RoundSnapshot) {
        out.clear();
        out.score = self.score;
        out.elapsed = elapsed;
        out.remaining_secs = remaining_secs;
        out.words_left = self.words.len();

        for (i, word) in self.words.iter().enumerate() {
            if Some(i) == self.selected {
                continue;
            }
            if let Some(active_secs) = word.active_secs(elapsed) {
                out.visible.push(WordSnapshot::from_word(word, active_secs));
            }
        }

        out.selected = self
            .selected_word()
            .and_then(|w| Letters::from(w.letters()).ok());
    }

    pub fn snapshot(&self, elapsed: f64, remaining_secs: f64) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(elapsed, remaining_secs, &mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[(&str, u32)]) -> Vec<Word> {
        entries
            .iter()
            .map(|&(t, a)| Word::from_text(t, 10, a, 10).unwrap())
            .collect()
    }

    #[test]
    fn remove_is_stable() {
        let mut round = RoundState::new(words(&[("a", 0), ("b", 0), ("c", 0), ("d", 0)]));
        let removed = round.remove(1).unwrap();
        assert_eq!(removed.letters(), "b");

        let left: Vec<&str> = round.words().iter().map(|w| w.letters()).collect();
        assert_eq!(left, vec!["a", "c", "d"]);
        assert_eq!(round.remaining(), 3);
        assert_eq!(round.total_words(), 4);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut round = RoundState::new(words(&[("a", 0)]));
        assert!(round.remove(5).is_none());
        assert_eq!(round.remaining(), 1);
    }

    #[test]
    fn remove_keeps_selection_pointing_at_same_word() {
        let mut round = RoundState::new(words(&[("a", 0), ("b", 0), ("c", 0)]));
        round.set_selected(Some(2));
        round.remove(0);
        assert_eq!(round.selected_word().unwrap().letters(), "c");

        round.remove(1);
        assert_eq!(round.selected(), None);
    }

    #[test]
    fn generate_keeps_sampled_order() {
        let mut rng = SimpleRng::new(11);
        let letters = vec![Letters::from("um").unwrap(), Letters::from("dois").unwrap()];
        let round = RoundState::generate(letters, &mut rng);

        assert_eq!(round.words()[0].letters(), "um");
        assert_eq!(round.words()[1].letters(), "dois");
        assert!(round.words().iter().all(|w| w.activation_time() <= 4));
        assert_eq!(round.score(), 0);
        assert_eq!(round.last_keystroke(), 0.0);
    }

    #[test]
    fn snapshot_hides_inactive_and_separates_selected() {
        let mut round = RoundState::new(words(&[("early", 0), ("late", 8), ("chosen", 1)]));
        round.set_selected(Some(2));

        let snap = round.snapshot(3.5, 20.0);
        assert_eq!(snap.visible.len(), 1);
        assert_eq!(snap.visible[0].letters.as_str(), "early");
        assert_eq!(snap.visible[0].active_secs, 3);
        assert_eq!(snap.selected.unwrap().as_str(), "chosen");
        assert_eq!(snap.words_left, 3);
    }
}
