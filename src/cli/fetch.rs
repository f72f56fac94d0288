//! One-shot fetch command implementation.

use chrono::Utc;

use crate::cli::args::{FetchArgs, OutputFormat};
use crate::core::config::Config;
use crate::core::fetcher::fetch_once;
use crate::error::Result;
use crate::render::{self, QuotePayload};

/// Execute the fetch command.
///
/// Prints the quote (or the fixed failure message) to stdout; on failure
/// the underlying error is propagated so the process exits with the
/// matching code.
pub async fn execute(
    args: &FetchArgs,
    format: OutputFormat,
    pretty: bool,
    no_color: bool,
) -> Result<()> {
    let config = Config::load()?;
    let tag = args.effective_tag();

    tracing::debug!(tag, credential = config.has_credential(), "one-shot fetch");

    let outcome = fetch_once(&config, tag).await?;

    match outcome.result {
        Ok(quote) => {
            let payload = QuotePayload {
                quote,
                // A successful outcome always names its source.
                provider: outcome.source.expect("successful fetch has a source"),
                fetched_at: Utc::now(),
            };
            println!("{}", render::render_quote(&payload, format, pretty, no_color)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", render::render_failure(tag, format, pretty, no_color)?);
            Err(e)
        }
    }
}
