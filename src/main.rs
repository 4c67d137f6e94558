//! Falling words runner (default binary).
//!
//! Loads configuration and the dictionary before touching the terminal, so
//! a missing word list aborts with a readable error instead of a blank
//! alternate screen.

use anyhow::{Context, Result};

use falling_words::core::{GameLoop, LeaderboardStore, SimpleRng, SystemClock, WordBank};
use falling_words::input::TerminalInput;
use falling_words::term::TerminalDisplay;
use falling_words::{logging, Config, Session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    let _log_guard = logging::init(&config.log_dir).context("failed to initialize logging")?;

    let bank = WordBank::open(&config.dictionary)?;
    let store = LeaderboardStore::new(&config.records);
    store.load()?;

    let rng = config.seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_time);

    let mut display = TerminalDisplay::new();
    display.enter()?;

    let game = GameLoop::new(
        SystemClock::new(),
        TerminalInput::new(config.tick),
        display,
    );
    let mut session = Session::new(&bank, &store, config.word_count, rng, game);
    let result = session.run();

    // Always try to restore terminal state.
    let (_, _, mut display) = session.into_game().into_parts();
    let _ = display.exit();

    let summary = result?;
    tracing::info!(?summary, "bye");
    Ok(())
}
