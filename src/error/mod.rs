//! Error types for qfetch.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! - **Network**: transport-level failures and timeouts
//! - **Provider**: non-success HTTP statuses and unusable payloads
//! - **Configuration**: config file parsing or invalid values
//! - **Cancelled**: a request session was superseded or timed out;
//!   routine control flow, never surfaced to the user as an error
//! - **Internal**: I/O, serialization, or unclassified errors

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network issues (timeout, DNS, connection refused).
    Network,
    /// Provider-specific issues (error statuses, unparseable payloads).
    Provider,
    /// Configuration issues (parse errors, invalid values).
    Configuration,
    /// Superseded or timed-out request sessions.
    Cancelled,
    /// Internal errors (bugs, I/O, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Provider => "Provider error",
            Self::Configuration => "Configuration error",
            Self::Cancelled => "Cancelled",
            Self::Internal => "Internal error",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes for one-shot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Parse/format errors, invalid configuration
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

// =============================================================================
// Error Type
// =============================================================================

/// Main error type for qfetch operations.
#[derive(Error, Debug)]
pub enum QfetchError {
    /// Non-success HTTP status from a quote provider.
    #[error("provider {provider} returned HTTP {status}")]
    Http { provider: &'static str, status: u16 },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out after the given number of seconds.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Failed to parse a provider response body.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    /// The request session was superseded or timed out.
    #[error("request cancelled")]
    Cancelled,

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error parsing the configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QfetchError {
    /// Map error to exit code for one-shot mode.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::ConfigParse { .. } | Self::ParseResponse(_) => {
                ExitCode::ParseError
            }
            Self::Timeout(_) => ExitCode::Timeout,
            Self::Http { .. }
            | Self::Network(_)
            | Self::Cancelled
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) | Self::Timeout(_) => ErrorCategory::Network,
            Self::Http { .. } | Self::ParseResponse(_) => ErrorCategory::Provider,
            Self::Config(_) | Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Whether this error is a cancelled request session.
    ///
    /// Cancellation is routine control flow: it never triggers provider
    /// fallback and is never shown to the user.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result alias using [`QfetchError`].
pub type Result<T> = std::result::Result<T, QfetchError>;
