//! Quote provider adapters.
//!
//! Each provider takes a tag/category string (possibly empty), issues a
//! single HTTP GET, and maps the JSON payload into a [`crate::core::quote::Quote`]
//! with missing fields defaulted.

pub mod ninjas;
pub mod quotable;

use serde::Serialize;

/// The two quote providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Primary: credentialed, array-shaped response.
    ApiNinjas,
    /// Secondary: credential-free, object-shaped response; fallback target.
    Quotable,
}

impl ProviderKind {
    /// Stable label for logs and JSON output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ApiNinjas => "api-ninjas",
            Self::Quotable => "quotable",
        }
    }

    /// Display name for human output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ApiNinjas => "API Ninjas",
            Self::Quotable => "Quotable",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
