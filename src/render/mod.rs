//! Output rendering for human and robot modes (one-shot command).

pub mod human;
pub mod robot;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::Quote;
use crate::error::Result;
use crate::providers::ProviderKind;

/// Payload for a successfully fetched quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub quote: Quote,
    pub provider: ProviderKind,
    pub fetched_at: DateTime<Utc>,
}

/// Render a fetched quote.
pub fn render_quote(
    payload: &QuotePayload,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_quote(&payload.quote, no_color)),
        OutputFormat::Json => robot::render_json(payload, pretty),
    }
}

/// Render the fixed failure message (both providers failed).
///
/// `tag` is the tag the failed request was issued with; a user-typed tag
/// is preserved in the output.
pub fn render_failure(
    tag: &str,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_failure(tag, no_color)),
        OutputFormat::Json => robot::render_failure_json(tag, pretty),
    }
}
