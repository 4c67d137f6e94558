//! Session flow: intro, rounds, hall of fame and the play-again prompt.
//!
//! ```text
//! Intro -> [ round -> result -> (name entry) -> hall of fame -> play again? ]*
//! ```
//!
//! Ctrl-C ends the session from any point. The other waits only end on the
//! key they ask for.

use crate::core::{
    Clock, Dictionary, Display, GameLoop, Input, LeaderboardStore, NameEntry, NameEntryStep,
    Result, RoundState, SimpleRng, WordBank,
};
use crate::term::{Screen, ScreenDisplay};
use crate::types::{Key, RoundOutcome};

/// What a finished session looked like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub best_score: u32,
    pub last_outcome: Option<RoundOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a, W, C, I, D> {
    bank: &'a WordBank<W>,
    store: &'a LeaderboardStore,
    word_count: usize,
    rng: SimpleRng,
    game: GameLoop<C, I, D>,
}

impl<'a, W, C, I, D> Session<'a, W, C, I, D>
where
    W: Dictionary,
    C: Clock,
    I: Input,
    D: Display + ScreenDisplay,
{
    pub fn new(
        bank: &'a WordBank<W>,
        store: &'a LeaderboardStore,
        word_count: usize,
        rng: SimpleRng,
        game: GameLoop<C, I, D>,
    ) -> Self {
        Self {
            bank,
            store,
            word_count,
            rng,
            game,
        }
    }

    pub fn game(&self) -> &GameLoop<C, I, D> {
        &self.game
    }

    pub fn into_game(self) -> GameLoop<C, I, D> {
        self.game
    }

    /// Play until the player declines another round or presses Ctrl-C.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        tracing::info!(seed = self.rng.seed(), words = self.word_count, "session started");

        if self.confirm(&Screen::Intro)? == Flow::Continue {
            while self.play_round(&mut summary)? == Flow::Continue {}
        }

        tracing::info!(
            rounds = summary.rounds,
            best_score = summary.best_score,
            "session finished"
        );
        Ok(summary)
    }

    fn play_round(&mut self, summary: &mut SessionSummary) -> Result<Flow> {
        let mut board = self.store.load()?;
        let letters = self.bank.sample(self.word_count, &mut self.rng)?;
        let mut round = RoundState::generate(letters, &mut self.rng);

        let report = self.game.run_round(&mut round)?;
        summary.rounds += 1;
        summary.best_score = summary.best_score.max(report.score);
        summary.last_outcome = Some(report.outcome);

        if report.outcome == RoundOutcome::Interrupted {
            return Ok(Flow::Quit);
        }

        let result = Screen::RoundOver {
            outcome: report.outcome,
            score: report.score,
        };
        if self.confirm(&result)? == Flow::Quit {
            return Ok(Flow::Quit);
        }

        if board.is_rank_worthy(report.score) {
            let Some(name) = self.enter_name()? else {
                return Ok(Flow::Quit);
            };
            if let Some(rank) = board.insert(&name, report.score) {
                tracing::info!(rank = rank + 1, score = report.score, "new record");
            }
            self.store.save(&board)?;
        }

        if self.confirm(&Screen::HallOfFame { board: &board })? == Flow::Quit {
            return Ok(Flow::Quit);
        }

        self.play_again()
    }

    /// Show `screen` and wait for Enter.
    fn confirm(&mut self, screen: &Screen<'_>) -> Result<Flow> {
        self.game.display_mut().show(screen)?;
        loop {
            match self.game.input_mut().wait_key()? {
                Key::Enter => return Ok(Flow::Continue),
                Key::Interrupt => return Ok(Flow::Quit),
                _ => {}
            }
        }
    }

    /// Returns `None` when the prompt was abandoned with Ctrl-C.
    fn enter_name(&mut self) -> Result<Option<String>> {
        let mut entry = NameEntry::new();
        loop {
            self.game.display_mut().show(&Screen::NameEntry {
                name: entry.as_str(),
            })?;
            let key = self.game.input_mut().wait_key()?;
            match entry.apply(key) {
                NameEntryStep::Editing => {}
                NameEntryStep::Done => return Ok(Some(entry.name().to_string())),
                NameEntryStep::Cancelled => return Ok(None),
            }
        }
    }

    fn play_again(&mut self) -> Result<Flow> {
        self.game.display_mut().show(&Screen::PlayAgain)?;
        loop {
            match self.game.input_mut().wait_key()? {
                Key::Char('s' | 'S') => return Ok(Flow::Continue),
                Key::Char('n' | 'N') | Key::Interrupt => return Ok(Flow::Quit),
                _ => {}
            }
        }
    }
}
