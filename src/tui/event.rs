//! Event handling for the interactive mode.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

/// TUI events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal tick event for refresh.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Event handler polling the terminal with a fixed tick rate.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event with timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if event polling fails.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

/// Key action resulting from a key press.
///
/// The tag region doubles as the input field for the next request, so
/// printable characters edit it rather than being bound to commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application.
    Quit,
    /// Trigger a new quote request.
    Trigger,
    /// Append a character to the tag region.
    Input(char),
    /// Delete the last character of the tag region.
    Erase,
    /// Clear the tag region.
    ClearTag,
    /// No action.
    None,
}

impl KeyAction {
    /// Parse a key event into an action.
    #[must_use]
    pub const fn from_key_event(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => Self::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::ClearTag,
            KeyCode::Enter => Self::Trigger,
            KeyCode::Backspace => Self::Erase,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Self::Input(c),
            _ => Self::None,
        }
    }
}
