//! Terminal rendering for the falling words game.
//!
//! Frames are drawn into a plain framebuffer by pure views
//! ([`RoundView`] for the playing field, [`Screen`] for everything between
//! rounds) and flushed to the terminal by [`TerminalRenderer`], which only
//! re-emits the cells that changed.

pub mod display;
pub mod fb;
pub mod renderer;
pub mod round_view;
pub mod screens;

pub use falling_words_core as core;
pub use falling_words_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use round_view::{word_position, RoundView, Viewport};
pub use screens::{Screen, ScreenDisplay};
