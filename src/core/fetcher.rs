//! Request session lifecycle: supersession, safety timeout, and the
//! render guard.
//!
//! At most one session is live at a time. Starting a new session cancels
//! the prior one's token before the new request is spawned, so a stale,
//! slow response can never overwrite a fresher one. The safety timeout
//! signals the same token as supersession; a timed-out request behaves
//! exactly like a cancelled one.

use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::http::{SAFETY_TIMEOUT, default_client};
use crate::core::pipeline::{self, FetchOutcome};
use crate::error::{QfetchError, Result};

// =============================================================================
// Request Session
// =============================================================================

/// One logical request attempt, identified by its cancellation token and
/// generation number.
#[derive(Debug)]
struct RequestSession {
    generation: u64,
    token: CancellationToken,
}

// =============================================================================
// Settlement
// =============================================================================

/// Message delivered to the UI when a request settles.
///
/// Carries the session generation (the render guard) and the tag the
/// request was issued with (the failure path preserves a user-typed tag).
#[derive(Debug)]
pub struct FetchSettled {
    pub generation: u64,
    pub tag: String,
    pub outcome: FetchOutcome,
}

// =============================================================================
// Quote Fetcher
// =============================================================================

/// Owns the HTTP client, the configuration, and the single active
/// request session.
pub struct QuoteFetcher {
    client: Client,
    config: Config,
    safety_timeout: Duration,
    next_generation: u64,
    current: Option<RequestSession>,
    outcomes: mpsc::UnboundedSender<FetchSettled>,
}

impl QuoteFetcher {
    /// Create a fetcher delivering settlements on `outcomes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config, outcomes: mpsc::UnboundedSender<FetchSettled>) -> Result<Self> {
        Ok(Self {
            client: default_client()?,
            config,
            safety_timeout: SAFETY_TIMEOUT,
            next_generation: 0,
            current: None,
            outcomes,
        })
    }

    /// Override the safety timeout (used by tests).
    #[must_use]
    pub const fn with_safety_timeout(mut self, timeout: Duration) -> Self {
        self.safety_timeout = timeout;
        self
    }

    /// Start a new request session for `tag`, superseding any
    /// outstanding one.
    ///
    /// The prior session's token is cancelled before the new request is
    /// spawned. Returns the new session's generation.
    pub fn request_quote(&mut self, tag: &str) -> u64 {
        if let Some(prev) = self.current.take() {
            tracing::debug!(generation = prev.generation, "superseding request");
            prev.token.cancel();
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let token = CancellationToken::new();
        self.current = Some(RequestSession {
            generation,
            token: token.clone(),
        });

        let client = self.client.clone();
        let config = self.config.clone();
        let tag = tag.trim().to_string();
        let safety_timeout = self.safety_timeout;
        let outcomes = self.outcomes.clone();

        tokio::spawn(async move {
            // The safety timeout signals the same token as supersession.
            let timeout_guard = tokio::spawn({
                let token = token.clone();
                async move {
                    tokio::time::sleep(safety_timeout).await;
                    tracing::debug!(generation, "safety timeout elapsed, cancelling");
                    token.cancel();
                }
            });

            // Cancellation drops the in-flight HTTP future, aborting the
            // underlying connection.
            let outcome = tokio::select! {
                () = token.cancelled() => FetchOutcome::cancelled(),
                outcome = pipeline::fetch_quote(&client, &config, &tag) => outcome,
            };

            timeout_guard.abort();
            let _ = outcomes.send(FetchSettled {
                generation,
                tag,
                outcome,
            });
        });

        generation
    }

    /// Whether `generation` is the live session.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.current
            .as_ref()
            .is_some_and(|s| s.generation == generation)
    }

    /// Record a settlement. Returns `true` when it belongs to the live
    /// session (and so may update the display); a superseded session's
    /// settlement returns `false` and must be discarded.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.is_current(generation) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Cancel the outstanding session, if any (used on shutdown).
    pub fn cancel_current(&mut self) {
        if let Some(session) = self.current.take() {
            session.token.cancel();
        }
    }
}

// =============================================================================
// One-Shot Fetch
// =============================================================================

/// Fetch a single quote without session bookkeeping (one-shot mode).
///
/// The safety timeout still applies; with no UI to leave untouched it
/// surfaces as a timeout error rather than a silent cancellation.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub async fn fetch_once(config: &Config, tag: &str) -> Result<FetchOutcome> {
    let client = default_client()?;
    let tag = tag.trim();

    let outcome = tokio::select! {
        () = tokio::time::sleep(SAFETY_TIMEOUT) => FetchOutcome {
            result: Err(QfetchError::Timeout(SAFETY_TIMEOUT.as_secs())),
            source: None,
            attempts: Vec::new(),
        },
        outcome = pipeline::fetch_quote(&client, config, tag) => outcome,
    };

    Ok(outcome)
}
