//! Terminal implementation of the core `Display` capability.

use crate::core::{Display, GameError, RoundSnapshot};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::round_view::{RoundView, Viewport};
use crate::screens::{Screen, ScreenDisplay};

/// Fallback size when the terminal cannot report one.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: RoundView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: RoundView::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> anyhow::Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> anyhow::Result<()> {
        self.renderer.exit()
    }

    fn flush(&mut self) -> Result<(), GameError> {
        self.renderer
            .draw(&self.fb)
            .map_err(|e| GameError::Render(e.to_string()))
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalDisplay {
    fn draw(&mut self, frame: &RoundSnapshot) -> Result<(), GameError> {
        self.view.render_into(frame, viewport(), &mut self.fb);
        self.flush()
    }
}

impl ScreenDisplay for TerminalDisplay {
    fn show(&mut self, screen: &Screen<'_>) -> Result<(), GameError> {
        screen.render_into(viewport(), &mut self.fb);
        self.flush()
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
    Viewport::new(w, h)
}
