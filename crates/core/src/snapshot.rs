use crate::word::{Letters, Word};

/// A visible, unselected word as the renderer needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSnapshot {
    pub letters: Letters,
    pub horizontal_slot: u8,
    /// Whole seconds since activation.
    pub active_secs: u32,
    pub allowed_duration: u32,
}

impl WordSnapshot {
    pub fn from_word(word: &Word, active_secs: u32) -> Self {
        Self {
            letters: Letters::from(word.letters()).unwrap_or_default(),
            horizontal_slot: word.horizontal_slot(),
            active_secs,
            allowed_duration: word.allowed_duration(),
        }
    }
}

/// Everything the display needs to draw one frame of a round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundSnapshot {
    pub score: u32,
    pub elapsed: f64,
    pub remaining_secs: f64,
    pub words_left: usize,
    pub visible: Vec<WordSnapshot>,
    /// Remaining letters of the word being typed.
    pub selected: Option<Letters>,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.score = 0;
        self.elapsed = 0.0;
        self.remaining_secs = 0.0;
        self.words_left = 0;
        self.visible.clear();
        self.selected = None;
    }
}
