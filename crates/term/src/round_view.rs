//! RoundView: maps a `core::RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! row 0        WORDS 7        SCORE: 153        TIME 21s
//! row 2        ________________________________________
//! row 4..      falling words
//! row h-2      ________________________________________
//! row h-1               >>>>> word <<<<<
//! ```

use crate::core::{RoundSnapshot, WordSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HEADER_ROW: u16 = 0;
const RULE_ROW: u16 = 2;
const FIELD_TOP: u16 = 4;

pub const SELECTED_OPEN: &str = ">>>>> ";
pub const SELECTED_CLOSE: &str = " <<<<<";

const WORD_STYLE: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const HEADER_STYLE: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const RULE_STYLE: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130));
const SELECTED_STYLE: CellStyle = CellStyle::fg(Rgb::new(250, 250, 30)).bold();

/// Renders the playing field of a round.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundView;

impl RoundView {
    pub fn new() -> Self {
        Self
    }

    /// Render a frame into an existing framebuffer.
    pub fn render_into(&self, snap: &RoundSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        self.draw_header(fb, snap);
        fb.hline(RULE_ROW, '_', RULE_STYLE);

        for word in &snap.visible {
            let (x, y) = word_position(word, viewport);
            fb.put_str(x, y, word.letters.as_str(), WORD_STYLE);
        }

        let bottom = viewport.height.saturating_sub(2);
        if bottom > RULE_ROW {
            fb.hline(bottom, '_', RULE_STYLE);
        }

        if let Some(selected) = &snap.selected {
            let text = format!("{}{}{}", SELECTED_OPEN, selected.as_str(), SELECTED_CLOSE);
            fb.put_str_centered(viewport.height.saturating_sub(1), &text, SELECTED_STYLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot) {
        fb.put_str(0, HEADER_ROW, &format!("WORDS {}", snap.words_left), HEADER_STYLE);
        fb.put_str_centered(HEADER_ROW, &format!("SCORE: {}", snap.score), HEADER_STYLE);

        let time = format!("TIME {}s", snap.remaining_secs.ceil() as u32);
        let x = fb.width().saturating_sub(time.chars().count() as u16);
        fb.put_str(x, HEADER_ROW, &time, HEADER_STYLE);
    }
}

/// Screen position of a falling word.
///
/// The column spreads the slot percentage over the space the word leaves
/// free; the row moves from the top of the field to the floor as the word
/// uses up its allowed duration.
pub fn word_position(word: &WordSnapshot, viewport: Viewport) -> (u16, u16) {
    let len = word.letters.len() as u32;
    let free = (viewport.width as u32).saturating_sub(len);
    let x = free * word.horizontal_slot as u32 / 100;

    let floor = viewport.height.saturating_sub(3).max(FIELD_TOP) as u32;
    let span = floor - FIELD_TOP as u32;
    let allowed = word.allowed_duration.max(1);
    let y = (FIELD_TOP as u32 + span * word.active_secs / allowed).min(floor);

    (x as u16, y as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letters;

    fn ws(text: &str, slot: u8, active: u32, allowed: u32) -> WordSnapshot {
        WordSnapshot {
            letters: Letters::from(text).unwrap(),
            horizontal_slot: slot,
            active_secs: active,
            allowed_duration: allowed,
        }
    }

    #[test]
    fn word_starts_at_field_top_and_falls_to_floor() {
        let vp = Viewport::new(80, 24);
        assert_eq!(word_position(&ws("casa", 0, 0, 10), vp), (0, 4));
        assert_eq!(word_position(&ws("casa", 0, 5, 10), vp), (0, 12));
        assert_eq!(word_position(&ws("casa", 0, 10, 10), vp), (0, 21));
        assert_eq!(word_position(&ws("casa", 0, 50, 10), vp), (0, 21));
    }

    #[test]
    fn slot_spreads_over_free_width() {
        let vp = Viewport::new(80, 24);
        assert_eq!(word_position(&ws("casa", 100, 0, 10), vp).0, 76);
        assert_eq!(word_position(&ws("casa", 50, 0, 10), vp).0, 38);
    }

    #[test]
    fn tiny_viewport_does_not_underflow() {
        let vp = Viewport::new(2, 3);
        assert_eq!(word_position(&ws("casa", 100, 3, 5), vp), (0, 4));
    }
}
