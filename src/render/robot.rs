//! Robot-mode output (JSON).
//!
//! Stable, machine-consumable output for scripts and agents.

use serde::Serialize;

use crate::core::quote::FETCH_FAILED_MESSAGE;
use crate::error::Result;

/// Render any serializable payload as JSON.
pub fn render_json<T: Serialize>(payload: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    Ok(json)
}

/// JSON document for a failed fetch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FailurePayload<'a> {
    message: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    tags: &'a str,
}

/// Render the fixed failure message as JSON.
pub fn render_failure_json(tag: &str, pretty: bool) -> Result<String> {
    render_json(
        &FailurePayload {
            message: FETCH_FAILED_MESSAGE,
            tags: tag,
        },
        pretty,
    )
}
