// Interactive transcript viewer
mod app;
mod events;
mod layout;
mod rendering;

use std::io::{self, Stdout};

use anyhow::Result;
pub use app::App;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::models::CatalogEntry;
use crate::store::StoreCache;

/// Raw-mode alternate-screen terminal, restored when dropped (including on panic
/// unwinding and early returns)
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive viewer over `catalog`, opening the entry at `initial`
pub fn run_interactive(catalog: Vec<CatalogEntry>, initial: usize, cache: StoreCache) -> Result<()> {
    let mut app = App::new(catalog, cache);
    app.open_file(initial);

    let mut guard = TerminalGuard::enter()?;
    app.run(&mut guard.terminal)
}
