//! Terminal ownership: raw mode, alternate screen, and the ratatui sink.

use super::ui;
use crate::session::RenderSink;
use chroma_core::GameView;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Puts the terminal in raw mode on the alternate screen and restores it
/// on drop, including when the session loop fails.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Takes over the terminal.
    #[instrument]
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!("Terminal ready");
        Ok(Self { terminal })
    }
}

impl RenderSink for TerminalSession {
    fn render(&mut self, view: &GameView<'_>) -> anyhow::Result<()> {
        self.terminal.draw(|frame| ui::draw(frame, view))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show) {
            error!(error = %e, "Failed to leave alternate screen");
        }
        info!("Terminal restored");
    }
}
