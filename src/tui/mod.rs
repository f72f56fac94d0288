//! Interactive terminal mode using ratatui.
//!
//! Displays the quote, author, and tag regions with a keyboard trigger
//! for new requests.

mod app;
mod event;
mod loading;
mod view;

pub use app::App;
pub use event::{Event, EventHandler, KeyAction};
pub use loading::{FRAME_INTERVAL, LOADING_FRAMES, LoadingIndicator};

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::cli::args::TuiArgs;
use crate::core::config::Config;
use crate::error::{QfetchError, Result};
use crate::util::env::stdout_is_tty;

/// Terminal type alias for the TUI backend.
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// # Errors
///
/// Returns an error if terminal initialization fails.
pub fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
///
/// # Errors
///
/// Returns an error if terminal restoration fails.
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive mode.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or the event
/// loop fails.
pub async fn run(args: &TuiArgs) -> Result<()> {
    if !stdout_is_tty() {
        return Err(QfetchError::Config(
            "interactive mode requires a terminal".to_string(),
        ));
    }

    let config = Config::load()?;
    let initial_tag = args.tag.as_deref().unwrap_or_default();

    let mut terminal = init_terminal().map_err(QfetchError::Io)?;

    let app_result = App::new(config, initial_tag)?.run(&mut terminal).await;

    // Always try to restore the terminal, even if the app failed
    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Failed to restore terminal: {e}");
    }

    app_result
}
