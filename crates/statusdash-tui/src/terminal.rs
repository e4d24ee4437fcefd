//! Entering and leaving the full-screen display mode.
//!
//! Raw mode is left off: the dashboard reads no input, and keeping the
//! terminal cooked lets Ctrl+C reach the host program.

use std::io::{self, Stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Terminal drawing to stdout.
pub type StdoutTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen with a hidden cursor.
pub fn enter_display_mode() -> io::Result<StdoutTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = leave_display_mode();
            Err(e)
        }
    }
}

/// Show the cursor and return to the normal screen.
pub fn leave_display_mode() -> io::Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)
}
