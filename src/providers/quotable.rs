//! Quotable provider (secondary).
//!
//! Credential-free. Returns a single JSON object with `content`,
//! `author`, and a `tags` array.

use reqwest::Client;
use serde::Deserialize;

use crate::core::http::map_send_error;
use crate::core::quote::{MISSING_QUOTE_TEXT, Quote, UNKNOWN_AUTHOR, field_or, join_tags};
use crate::error::{QfetchError, Result};

use super::ProviderKind;

/// Quotable response object.
#[derive(Debug, Deserialize)]
struct QuotableQuote {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Fetch a quote from Quotable.
///
/// The `tags` query parameter is omitted when `tag` is empty.
///
/// # Errors
///
/// Returns [`QfetchError::Http`] on a non-success status,
/// [`QfetchError::Network`]/[`QfetchError::Timeout`] on transport
/// failures, and [`QfetchError::ParseResponse`] on an unparseable body.
pub async fn fetch(client: &Client, base_url: &str, tag: &str) -> Result<Quote> {
    let mut request = client.get(base_url);
    if !tag.is_empty() {
        request = request.query(&[("tags", tag)]);
    }

    let response = request.send().await.map_err(|e| map_send_error(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(QfetchError::Http {
            provider: ProviderKind::Quotable.label(),
            status: status.as_u16(),
        });
    }

    let data: QuotableQuote = response
        .json()
        .await
        .map_err(|e| QfetchError::ParseResponse(e.to_string()))?;

    Ok(map_payload(data, tag))
}

fn map_payload(data: QuotableQuote, tag: &str) -> Quote {
    Quote {
        content: field_or(data.content, MISSING_QUOTE_TEXT),
        author: field_or(data.author, UNKNOWN_AUTHOR),
        tags_text: join_tags(&data.tags, tag),
    }
}
