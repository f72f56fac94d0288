//! Provider selection pipeline.
//!
//! Tries the primary provider (when a credential is configured), falling
//! back to the secondary on any non-cancellation failure. No retries:
//! each provider is attempted at most once per request.

use std::time::Instant;

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::core::config::Config;
use crate::core::quote::Quote;
use crate::error::{QfetchError, Result};
use crate::providers::{ProviderKind, ninjas, quotable};

// =============================================================================
// Fetch Attempt
// =============================================================================

/// Record of a single provider attempt.
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    pub provider: ProviderKind,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub success: bool,
    pub error: Option<String>,
}

// =============================================================================
// Fetch Outcome
// =============================================================================

/// Result of a pipeline execution.
#[derive(Debug)]
pub struct FetchOutcome {
    pub result: Result<Quote>,
    /// Provider that produced the quote, when the fetch succeeded.
    pub source: Option<ProviderKind>,
    pub attempts: Vec<FetchAttempt>,
}

impl FetchOutcome {
    /// Outcome for a session cancelled before the pipeline settled.
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            result: Err(QfetchError::Cancelled),
            source: None,
            attempts: Vec::new(),
        }
    }

    /// Whether the fetch produced a quote.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Whether the session was cancelled (superseded or timed out).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.result.as_ref().is_err_and(QfetchError::is_cancelled)
    }
}

// =============================================================================
// Fallback Policy
// =============================================================================

/// Whether a primary-provider failure may fall back to the secondary.
///
/// Cancellation never triggers fallback; everything else (error status,
/// transport failure, unparseable payload) does.
#[must_use]
pub const fn should_fallback(err: &QfetchError) -> bool {
    !err.is_cancelled()
}

// =============================================================================
// Pipeline
// =============================================================================

/// Fetch a quote for `tag`, applying the provider selection policy.
///
/// 1. With a credential configured, attempt the primary provider.
/// 2. On any non-cancellation primary failure, silently attempt the
///    secondary with the same tag. No retry of the primary.
/// 3. Without a credential, go directly to the secondary.
///
/// Secondary failures surface in the outcome; the caller decides how to
/// present them.
pub async fn fetch_quote(client: &Client, config: &Config, tag: &str) -> FetchOutcome {
    let mut attempts = Vec::new();

    if let Some(api_key) = &config.api_key {
        tracing::debug!(tag, "trying primary provider");

        let result = run_attempt(&mut attempts, ProviderKind::ApiNinjas, async {
            ninjas::fetch(client, &config.primary_url, api_key, tag).await
        })
        .await;

        match result {
            Ok(quote) => {
                return FetchOutcome {
                    result: Ok(quote),
                    source: Some(ProviderKind::ApiNinjas),
                    attempts,
                };
            }
            Err(e) if should_fallback(&e) => {
                tracing::debug!(error = %e, "primary provider failed, falling back");
            }
            Err(e) => {
                return FetchOutcome {
                    result: Err(e),
                    source: None,
                    attempts,
                };
            }
        }
    } else {
        tracing::debug!(tag, "no credential configured, using secondary provider");
    }

    let result = run_attempt(&mut attempts, ProviderKind::Quotable, async {
        quotable::fetch(client, &config.secondary_url, tag).await
    })
    .await;

    match result {
        Ok(quote) => FetchOutcome {
            result: Ok(quote),
            source: Some(ProviderKind::Quotable),
            attempts,
        },
        Err(e) => {
            tracing::warn!(error = %e, "quote fetch failed");
            FetchOutcome {
                result: Err(e),
                source: None,
                attempts,
            }
        }
    }
}

/// Run one provider attempt, recording it.
async fn run_attempt(
    attempts: &mut Vec<FetchAttempt>,
    provider: ProviderKind,
    fut: impl Future<Output = Result<Quote>>,
) -> Result<Quote> {
    let started_at = Utc::now();
    let start = Instant::now();

    let result = fut.await;

    attempts.push(FetchAttempt {
        provider,
        started_at,
        duration_ms: start.elapsed().as_millis() as u64,
        success: result.is_ok(),
        error: result.as_ref().err().map(std::string::ToString::to_string),
    });

    result
}
