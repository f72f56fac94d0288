//! Core data models and request infrastructure.

pub mod config;
pub mod fetcher;
pub mod http;
pub mod logging;
pub mod pipeline;
pub mod quote;

pub use config::Config;
pub use fetcher::{FetchSettled, QuoteFetcher, fetch_once};
pub use pipeline::{FetchAttempt, FetchOutcome, fetch_quote, should_fallback};
pub use quote::{
    DEFAULT_CATEGORY, FETCH_FAILED_MESSAGE, MISSING_QUOTE_TEXT, Quote, UNKNOWN_AUTHOR,
};
