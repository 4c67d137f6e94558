//! Falling words (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `falling_words::{core,input,term,types}` and adds the
//! session flow, configuration and logging used by the binary.

pub mod config;
pub mod logging;
pub mod session;

pub use falling_words_core as core;
pub use falling_words_input as input;
pub use falling_words_term as term;
pub use falling_words_types as types;

pub use config::Config;
pub use session::{Session, SessionSummary};
