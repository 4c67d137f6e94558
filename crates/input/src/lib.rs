//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Key`] and provides
//! [`TerminalInput`], the non-blocking keyboard used by the game loop and the
//! menu screens.

pub mod map;
pub mod reader;

pub use falling_words_core as core;
pub use falling_words_types as types;

pub use map::{is_interrupt, map_key_event};
pub use reader::TerminalInput;
