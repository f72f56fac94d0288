//! Quote data model and payload defaulting rules.
//!
//! A `Quote` is the unit both providers produce: the quote text, the
//! author, and a display label for its tags/category. Quotes are
//! transient: produced per request, rendered, discarded.

use serde::{Deserialize, Serialize};

/// Placeholder when a payload carries no quote text.
pub const MISSING_QUOTE_TEXT: &str = "No quote found.";

/// Placeholder when a payload carries no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Tag label when neither the payload nor the request named one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Fixed user-facing message when every provider failed.
pub const FETCH_FAILED_MESSAGE: &str = "Oops! Couldn't fetch a quote right now.";

/// A single quote ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Quote text.
    pub content: String,
    /// Author name.
    pub author: String,
    /// Display label for the quote's tags or category.
    pub tags_text: String,
}

impl Quote {
    /// Author line with the em-dash attribution prefix.
    #[must_use]
    pub fn attribution(&self) -> String {
        format!("\u{2014} {}", self.author)
    }
}

/// Default a possibly-missing payload field, treating empty strings as
/// missing (providers have been seen returning `""` for absent fields).
#[must_use]
pub fn field_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Tag label for a payload that carried none: the requested tag, or the
/// default category when the request had no tag either.
#[must_use]
pub fn fallback_tags(requested: &str) -> String {
    if requested.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        requested.to_string()
    }
}

/// Join a payload's tag list for display, falling back per [`fallback_tags`]
/// when the list is empty.
#[must_use]
pub fn join_tags(tags: &[String], requested: &str) -> String {
    if tags.is_empty() {
        fallback_tags(requested)
    } else {
        tags.join(", ")
    }
}
