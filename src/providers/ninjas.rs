//! API Ninjas provider (primary).
//!
//! Requires an `X-Api-Key` credential. Returns a JSON array; the first
//! element's `quote`, `author`, and `category` fields are consumed.

use reqwest::Client;
use serde::Deserialize;

use crate::core::http::map_send_error;
use crate::core::quote::{MISSING_QUOTE_TEXT, Quote, UNKNOWN_AUTHOR, fallback_tags, field_or};
use crate::error::{QfetchError, Result};

use super::ProviderKind;

/// Credential request header.
const API_KEY_HEADER: &str = "X-Api-Key";

/// One element of the API Ninjas response array.
#[derive(Debug, Deserialize)]
struct NinjasQuote {
    #[serde(default)]
    quote: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Fetch a quote from API Ninjas.
///
/// The `category` query parameter is omitted when `category` is empty.
///
/// # Errors
///
/// Returns [`QfetchError::Http`] on a non-success status,
/// [`QfetchError::Network`]/[`QfetchError::Timeout`] on transport
/// failures, and [`QfetchError::ParseResponse`] on an unparseable body.
pub async fn fetch(
    client: &Client,
    base_url: &str,
    api_key: &str,
    category: &str,
) -> Result<Quote> {
    let mut request = client.get(base_url).header(API_KEY_HEADER, api_key);
    if !category.is_empty() {
        request = request.query(&[("category", category)]);
    }

    let response = request.send().await.map_err(|e| map_send_error(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(QfetchError::Http {
            provider: ProviderKind::ApiNinjas.label(),
            status: status.as_u16(),
        });
    }

    let items: Vec<NinjasQuote> = response
        .json()
        .await
        .map_err(|e| QfetchError::ParseResponse(e.to_string()))?;

    Ok(map_payload(items.into_iter().next(), category))
}

/// Map the first array element (or its absence) into a `Quote`,
/// defaulting missing fields.
fn map_payload(item: Option<NinjasQuote>, category: &str) -> Quote {
    let item = item.unwrap_or(NinjasQuote {
        quote: None,
        author: None,
        category: None,
    });

    Quote {
        content: field_or(item.quote, MISSING_QUOTE_TEXT),
        author: field_or(item.author, UNKNOWN_AUTHOR),
        tags_text: field_or(item.category, &fallback_tags(category)),
    }
}
