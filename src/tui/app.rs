//! Application state and main event loop for the interactive mode.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::core::config::Config;
use crate::core::fetcher::{FetchSettled, QuoteFetcher};
use crate::core::quote::FETCH_FAILED_MESSAGE;
use crate::error::{QfetchError, Result};
use crate::providers::ProviderKind;

use super::Tui;
use super::event::{Event, EventHandler, KeyAction};
use super::loading::LoadingIndicator;
use super::view;

/// Application state for the interactive mode.
///
/// Owns the three display regions (quote text, author, tags), the
/// loading indicator, and the quote fetcher with its single active
/// session. The tag region doubles as the input for the next request.
pub struct App {
    fetcher: QuoteFetcher,
    outcomes: mpsc::UnboundedReceiver<FetchSettled>,
    pub(super) quote_text: String,
    pub(super) author: String,
    pub(super) tags: String,
    pub(super) loading: LoadingIndicator,
    pub(super) source: Option<ProviderKind>,
    pub(super) last_update: Option<DateTime<Utc>>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config, initial_tag: &str) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            fetcher: QuoteFetcher::new(config, tx)?,
            outcomes: rx,
            quote_text: String::new(),
            author: String::new(),
            tags: initial_tag.trim().to_string(),
            loading: LoadingIndicator::new(),
            source: None,
            last_update: None,
            should_quit: false,
        })
    }

    /// Run the application event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or event handling fails.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let event_handler = EventHandler::new(100); // 100ms tick rate

        // Initial fetch fires automatically, like the trigger would.
        self.begin_request();

        while !self.should_quit {
            terminal
                .draw(|frame| view::draw(frame, &self))
                .map_err(QfetchError::Io)?;

            match event_handler.next() {
                Ok(Event::Key(key)) => {
                    self.handle_action(KeyAction::from_key_event(key));
                }
                Ok(Event::Tick) => self.on_tick(),
                Ok(Event::Resize(_, _)) => {
                    // Terminal will be redrawn on next iteration
                }
                Err(e) => {
                    tracing::warn!("event error: {e}");
                }
            }
        }

        self.fetcher.cancel_current();
        Ok(())
    }

    /// Handle a key action.
    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            // The trigger is disabled while a request is in flight.
            KeyAction::Trigger => {
                if !self.loading.is_loading() {
                    self.begin_request();
                }
            }
            KeyAction::Input(c) => {
                if !self.loading.is_loading() {
                    self.tags.push(c);
                }
            }
            KeyAction::Erase => {
                if !self.loading.is_loading() {
                    self.tags.pop();
                }
            }
            KeyAction::ClearTag => {
                if !self.loading.is_loading() {
                    self.tags.clear();
                }
            }
            KeyAction::None => {}
        }
    }

    /// Drain settled requests and advance the loading animation.
    fn on_tick(&mut self) {
        while let Ok(settled) = self.outcomes.try_recv() {
            self.apply_settlement(settled);
        }
        self.loading.tick(Instant::now());
    }

    /// Start a new request session, reading the tag region at call time.
    fn begin_request(&mut self) {
        self.loading.start(Instant::now());
        let tag = self.tags.trim().to_string();
        self.fetcher.request_quote(&tag);
    }

    /// Apply a settled request to the display.
    ///
    /// Settlements from superseded sessions are discarded without any UI
    /// mutation.
    pub(super) fn apply_settlement(&mut self, settled: FetchSettled) {
        if !self.fetcher.settle(settled.generation) {
            tracing::debug!(generation = settled.generation, "discarding stale settlement");
            return;
        }

        self.loading.stop();

        match settled.outcome.result {
            Ok(quote) => {
                self.author = quote.attribution();
                self.quote_text = quote.content;
                self.tags = quote.tags_text;
                self.source = settled.outcome.source;
                self.last_update = Some(Utc::now());
            }
            Err(e) if e.is_cancelled() => {
                // Superseded or timed out: no render.
            }
            Err(e) => {
                tracing::warn!(error = %e, "quote fetch failed");
                self.quote_text = FETCH_FAILED_MESSAGE.to_string();
                self.author.clear();
                // Preserve a user-typed tag; clear a stale one.
                if settled.tag.is_empty() {
                    self.tags.clear();
                }
            }
        }
    }
}
