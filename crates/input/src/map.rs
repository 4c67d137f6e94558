//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a game key.
///
/// Only presses count. Control chords other than Ctrl-C are dropped so they
/// never reach the round as stray letters.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_interrupt(key) {
        return Some(Key::Interrupt);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Backspace),
        _ => None,
    }
}

/// Check if key should end the session.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(Key::Char('a'))
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Char('A'))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Key::Char(' '))
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Key::Enter)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(Key::Backspace)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Delete)),
            Some(Key::Backspace)
        );
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::F(1))), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            map_key_event(KeyEvent::new_with_kind_and_state(
                KeyCode::Char('a'),
                KeyModifiers::NONE,
                KeyEventKind::Release,
                KeyEventState::NONE,
            )),
            None
        );
    }

    #[test]
    fn test_interrupt_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(ctrl_c));
        assert_eq!(map_key_event(ctrl_c), Some(Key::Interrupt));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
    }
}
