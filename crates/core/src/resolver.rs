//! Input resolver - turns one typed character into selection, scoring or a
//! penalty
//!
//! Per tick:
//! 1. A selected word that has been fully typed is removed and the selection
//!    cleared.
//! 2. With no character this tick, nothing else happens.
//! 3. With no selection, the character selects the selectable word that starts
//!    with it and activated earliest.
//! 4. With a selection, a matching character consumes the first letter and
//!    scores; anything else is a miss.

use crate::round::RoundState;
use crate::scoring::{apply_miss_penalty, keystroke_points};
use crate::word::Word;

/// What a single call to [`resolve`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No character was read.
    Idle,
    /// A character was read but no word is (or could be) selected.
    Unmatched,
    /// The selected word lost its first letter.
    Hit { points: u32, completed: bool },
    /// The character did not match the selected word.
    Miss { deducted: u32 },
}

/// Index of the selectable word starting with `letter` that activated
/// earliest. Among equal activation times the first one in order wins.
pub fn find_selection(words: &[Word], letter: char, elapsed: f64) -> Option<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_selectable(elapsed) && w.first_letter() == Some(letter))
        .min_by_key(|(_, w)| w.activation_time())
        .map(|(i, _)| i)
}

/// Remove the selected word if it has been fully typed.
///
/// Returns the removed word.
pub fn retire_completed(round: &mut RoundState) -> Option<Word> {
    let index = round.selected()?;
    if !round.selected_word()?.is_complete() {
        return None;
    }
    let word = round.remove(index);
    round.set_selected(None);
    word
}

/// Apply one tick of input to the round.
///
/// `now` is the clock time of the keystroke, `elapsed` the round time used for
/// selectability.
pub fn resolve(round: &mut RoundState, typed: Option<char>, now: f64, elapsed: f64) -> Resolution {
    if let Some(done) = retire_completed(round) {
        tracing::debug!(
            activation = done.activation_time(),
            left = round.remaining(),
            "word cleared"
        );
    }

    let Some(letter) = typed else {
        return Resolution::Idle;
    };

    if round.selected().is_none() {
        let selection = find_selection(round.words(), letter, elapsed);
        if let Some(index) = selection {
            tracing::debug!(index, %letter, "word selected");
        }
        round.set_selected(selection);
    }

    let Some(word) = round.selected_word_mut() else {
        return Resolution::Unmatched;
    };

    if word.first_letter() == Some(letter) {
        word.advance();
        let completed = word.is_complete();
        let points = keystroke_points(now - round.last_keystroke());
        round.set_score(round.score().saturating_add(points));
        round.set_last_keystroke(now);
        Resolution::Hit { points, completed }
    } else {
        let before = round.score();
        round.set_score(apply_miss_penalty(before));
        round.set_last_keystroke(now);
        Resolution::Miss {
            deducted: before - round.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_of(entries: &[(&str, u32)]) -> RoundState {
        RoundState::new(
            entries
                .iter()
                .map(|&(t, a)| Word::from_text(t, 0, a, 30).unwrap())
                .collect(),
        )
    }

    #[test]
    fn earliest_activation_wins_selection() {
        let round = round_of(&[("bolo", 5), ("bala", 2), ("casa", 0)]);
        assert_eq!(find_selection(round.words(), 'b', 10.0), Some(1));
    }

    #[test]
    fn equal_activation_goes_to_first_in_order() {
        let round = round_of(&[("bolo", 3), ("bala", 3)]);
        assert_eq!(find_selection(round.words(), 'b', 10.0), Some(0));
    }

    #[test]
    fn activation_zero_is_not_overridden() {
        let round = round_of(&[("bolo", 0), ("bala", 1)]);
        assert_eq!(find_selection(round.words(), 'b', 10.0), Some(0));
    }

    #[test]
    fn inactive_words_cannot_be_selected() {
        let round = round_of(&[("bolo", 5), ("bala", 2)]);
        assert_eq!(find_selection(round.words(), 'b', 3.0), Some(1));
        assert_eq!(find_selection(round.words(), 'b', 1.0), None);
        assert_eq!(find_selection(round.words(), 'x', 10.0), None);
    }

    #[test]
    fn selecting_consumes_the_first_letter() {
        let mut round = round_of(&[("cat", 0)]);
        let r = resolve(&mut round, Some('c'), 10.0, 1.0);

        assert_eq!(
            r,
            Resolution::Hit {
                points: 1,
                completed: false
            }
        );
        assert_eq!(round.selected(), Some(0));
        assert_eq!(round.words()[0].letters(), "at");
        assert_eq!(round.last_keystroke(), 10.0);
    }

    #[test]
    fn no_input_does_nothing() {
        let mut round = round_of(&[("cat", 0)]);
        assert_eq!(resolve(&mut round, None, 10.0, 1.0), Resolution::Idle);
        assert_eq!(round.selected(), None);
        assert_eq!(round.last_keystroke(), 0.0);
    }

    #[test]
    fn unmatched_letter_without_selection_is_free() {
        let mut round = round_of(&[("cat", 0)]);
        round.set_score(30);
        assert_eq!(resolve(&mut round, Some('z'), 10.0, 1.0), Resolution::Unmatched);
        assert_eq!(round.score(), 30);
        assert_eq!(round.last_keystroke(), 0.0);
    }

    #[test]
    fn fast_hits_score_more() {
        let mut round = round_of(&[("cat", 0)]);
        resolve(&mut round, Some('c'), 10.0, 1.0);
        let r = resolve(&mut round, Some('a'), 10.5, 1.5);
        assert_eq!(
            r,
            Resolution::Hit {
                points: 50,
                completed: false
            }
        );
        let r = resolve(&mut round, Some('t'), 10.5, 1.5);
        assert_eq!(
            r,
            Resolution::Hit {
                points: 100,
                completed: true
            }
        );
        assert_eq!(round.score(), 151);
    }

    #[test]
    fn miss_deducts_and_resets_gap() {
        let mut round = round_of(&[("cat", 0)]);
        round.set_score(15);
        resolve(&mut round, Some('c'), 10.0, 1.0);
        assert_eq!(round.score(), 16);

        let r = resolve(&mut round, Some('x'), 12.0, 3.0);
        assert_eq!(r, Resolution::Miss { deducted: 10 });
        assert_eq!(round.score(), 6);
        assert_eq!(round.last_keystroke(), 12.0);

        let r = resolve(&mut round, Some('x'), 12.5, 3.5);
        assert_eq!(r, Resolution::Miss { deducted: 6 });
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn completed_word_is_removed_next_tick() {
        let mut round = round_of(&[("a", 0), ("b", 0)]);
        resolve(&mut round, Some('a'), 10.0, 1.0);
        assert_eq!(round.remaining(), 2);

        assert_eq!(resolve(&mut round, None, 10.1, 1.1), Resolution::Idle);
        assert_eq!(round.remaining(), 1);
        assert_eq!(round.selected(), None);
        assert_eq!(round.words()[0].letters(), "b");
    }
}
