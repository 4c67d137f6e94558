//! Static screens shown between rounds.
//!
//! Pure rendering like [`crate::round_view`]; the session decides when each
//! screen is shown and which keys leave it.

use crate::core::scoreboard::format_line;
use crate::core::{GameError, Leaderboard};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::round_view::Viewport;
use crate::types::RoundOutcome;

const GREEN: CellStyle = CellStyle::fg(Rgb::new(0, 240, 0));
const YELLOW: CellStyle = CellStyle::fg(Rgb::new(250, 250, 30));
const RED: CellStyle = CellStyle::fg(Rgb::new(230, 10, 10));
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));

/// Medal colors for ranks 1, 2 and 3.
const MEDALS: [Rgb; 3] = [
    Rgb::new(255, 223, 0),
    Rgb::new(192, 192, 192),
    Rgb::new(153, 101, 21),
];

const INSTRUCTIONS: [&str; 4] = [
    "Type the words that fall down the screen",
    "Type the first letter of a word to select it",
    "The selected word shows at the bottom between arrows",
    "The lower a word has fallen, the less time is left",
];

/// Render sink for the between-round screens.
pub trait ScreenDisplay {
    fn show(&mut self, screen: &Screen<'_>) -> Result<(), GameError>;
}

#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Intro,
    RoundOver { outcome: RoundOutcome, score: u32 },
    NameEntry { name: &'a str },
    HallOfFame { board: &'a Leaderboard },
    PlayAgain,
}

impl Screen<'_> {
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        match *self {
            Screen::Intro => intro(fb),
            Screen::RoundOver { outcome, score } => round_over(fb, outcome, score),
            Screen::NameEntry { name } => name_entry(fb, name),
            Screen::HallOfFame { board } => hall_of_fame(fb, board),
            Screen::PlayAgain => play_again(fb),
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}

fn intro(fb: &mut FrameBuffer) {
    let inner = INSTRUCTIONS
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16
        + 2;
    let x = fb.width().saturating_sub(inner + 2) / 2;
    let mut y = fb.height() / 3;

    let edge = format!("+{}+", "-".repeat(inner as usize));
    fb.put_str(x, y, &edge, GREEN);
    for line in INSTRUCTIONS {
        y += 1;
        fb.put_char(x, y, '|', GREEN);
        fb.put_str(x + 2, y, line, TEXT);
        fb.put_char(x + inner + 1, y, '|', GREEN);
    }
    y += 1;
    fb.put_str(x, y, &edge, GREEN);

    fb.put_str_centered(y + 1, "Press <enter> to start", YELLOW);
}

fn round_over(fb: &mut FrameBuffer, outcome: RoundOutcome, score: u32) {
    let y = (fb.height() / 2).saturating_sub(3);
    let (headline, style) = if outcome.is_win() {
        ("CONGRATULATIONS!! YOU WON!!!", YELLOW)
    } else {
        ("GAME OVER!!!", RED)
    };
    fb.put_str_centered(y, headline, style.bold());
    fb.put_str_centered(y + 1, &format!("TOTAL: {} POINTS", score), style);
    fb.put_str_centered(y + 2, "Press <enter> to continue", style);
}

fn name_entry(fb: &mut FrameBuffer, name: &str) {
    let y = fb.height() / 3;
    let x = fb.put_str_centered(y, "YOU'RE GOING DOWN IN HISTORY!!!", GREEN.bold());
    fb.put_str(x, y + 1, "Type your name and press <enter>", GREEN);

    let prompt = "Your name >: ";
    fb.put_str(x, y + 2, prompt, GREEN);
    let nx = x + prompt.chars().count() as u16;
    fb.put_str(nx, y + 2, name, TEXT);
    fb.put_char(nx + name.chars().count() as u16, y + 2, '_', YELLOW);
}

fn hall_of_fame(fb: &mut FrameBuffer, board: &Leaderboard) {
    let mut y = fb.height() / 3;
    let x = fb.put_str_centered(y, "HALL OF FAME!!!!", GREEN.bold());
    y += 1;

    for (i, player) in board.entries().iter().enumerate() {
        y += 1;
        let style = CellStyle::fg(MEDALS[i.min(MEDALS.len() - 1)]);
        fb.put_str(x, y, &format_line(i + 1, player), style);
    }
    if board.is_empty() {
        y += 1;
        fb.put_str(x, y, "(no records yet)", TEXT);
    }

    fb.put_str(x, y + 2, "Press <enter> to continue", GREEN);
}

fn play_again(fb: &mut FrameBuffer) {
    let y = fb.height() / 3;
    let x = fb.put_str_centered(y, "Type 's' to play again or 'n' to quit", GREEN);
    fb.put_str(x, y + 1, ">: ", GREEN);
}
