//! Name entry for the hall of fame prompt.
//!
//! Letters and spaces are accepted up to [`MAX_NAME_LEN`]; Backspace erases
//! the last character; Enter finishes. Everything else is ignored.

use arrayvec::ArrayString;

use crate::types::{Key, MAX_NAME_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEntryStep {
    Editing,
    Done,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    buf: ArrayString<MAX_NAME_LEN>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// The name as it will be stored.
    pub fn name(&self) -> &str {
        self.buf.trim()
    }

    pub fn apply(&mut self, key: Key) -> NameEntryStep {
        match key {
            Key::Enter => NameEntryStep::Done,
            Key::Interrupt => NameEntryStep::Cancelled,
            Key::Backspace => {
                self.buf.pop();
                NameEntryStep::Editing
            }
            Key::Char(c) if c.is_ascii_alphabetic() || c == ' ' => {
                // Full buffer: further characters are dropped.
                let _ = self.buf.try_push(c);
                NameEntryStep::Editing
            }
            Key::Char(_) => NameEntryStep::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(entry: &mut NameEntry, s: &str) {
        for c in s.chars() {
            entry.apply(Key::Char(c));
        }
    }

    #[test]
    fn accepts_letters_and_spaces_only() {
        let mut e = NameEntry::new();
        type_all(&mut e, "Ana-1 Maria!");
        assert_eq!(e.as_str(), "Ana Maria");
        assert_eq!(e.apply(Key::Enter), NameEntryStep::Done);
    }

    #[test]
    fn backspace_erases_last_char() {
        let mut e = NameEntry::new();
        type_all(&mut e, "Bob");
        e.apply(Key::Backspace);
        assert_eq!(e.as_str(), "Bo");

        let mut empty = NameEntry::new();
        assert_eq!(empty.apply(Key::Backspace), NameEntryStep::Editing);
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn length_is_bounded() {
        let mut e = NameEntry::new();
        type_all(&mut e, &"z".repeat(MAX_NAME_LEN + 5));
        assert_eq!(e.as_str().len(), MAX_NAME_LEN);
    }

    #[test]
    fn stored_name_is_trimmed() {
        let mut e = NameEntry::new();
        type_all(&mut e, "  Cid  ");
        assert_eq!(e.name(), "Cid");
    }

    #[test]
    fn interrupt_cancels() {
        let mut e = NameEntry::new();
        assert_eq!(e.apply(Key::Interrupt), NameEntryStep::Cancelled);
    }
}
