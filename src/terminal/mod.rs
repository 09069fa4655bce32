//! Terminal lifecycle.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and puts it back when dropped. [`setup_panic_hook`] covers the
//! paths where `Drop` never runs.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Owns the ratatui terminal and restores the tty on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal now. Later calls, including the one from `Drop`,
    /// do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
