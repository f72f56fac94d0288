//! HTTP client utilities.
//!
//! Provides a shared HTTP client for both provider adapters.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{QfetchError, Result};

/// Transport-level timeout for a single HTTP request.
///
/// Deliberately longer than [`SAFETY_TIMEOUT`]: the session-level safety
/// timeout owns the 10 s window, and a transport timeout firing first
/// would be indistinguishable from an ordinary network failure.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Session-level safety timeout covering the whole provider chain.
pub const SAFETY_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("qfetch/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| QfetchError::Network(e.to_string()))
}

/// Get or create a default HTTP client.
pub fn default_client() -> Result<Client> {
    build_client(CLIENT_TIMEOUT)
}

/// Map a `reqwest` send error into the qfetch taxonomy.
#[must_use]
pub fn map_send_error(err: &reqwest::Error) -> QfetchError {
    if err.is_timeout() {
        QfetchError::Timeout(CLIENT_TIMEOUT.as_secs())
    } else {
        QfetchError::Network(err.to_string())
    }
}
