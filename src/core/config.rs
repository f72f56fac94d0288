//! Configuration loading.
//!
//! Configuration is read once at startup and immutable thereafter. It
//! carries the optional primary-provider credential and the two provider
//! endpoint URLs.
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. Environment variables
//! 2. Config file (`~/.config/qfetch/config.toml` on Linux/macOS,
//!    `%APPDATA%/qfetch/config.toml` on Windows)
//! 3. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `QFETCH_API_KEY`: primary-provider credential; absent or empty means
//!   secondary-provider-only mode
//! - `QFETCH_PRIMARY_URL` / `QFETCH_SECONDARY_URL`: endpoint overrides
//! - `QFETCH_CONFIG`: override config file path

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{QfetchError, Result};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for the primary-provider credential.
pub const ENV_API_KEY: &str = "QFETCH_API_KEY";
/// Environment variable overriding the primary endpoint URL.
pub const ENV_PRIMARY_URL: &str = "QFETCH_PRIMARY_URL";
/// Environment variable overriding the secondary endpoint URL.
pub const ENV_SECONDARY_URL: &str = "QFETCH_SECONDARY_URL";
/// Environment variable to override the config file path.
pub const ENV_CONFIG: &str = "QFETCH_CONFIG";

// =============================================================================
// Endpoints
// =============================================================================

/// Primary provider endpoint (credentialed, array-shaped response).
pub const PRIMARY_BASE_URL: &str = "https://api.api-ninjas.com/v1/quotes";

/// Secondary provider endpoint (credential-free, object-shaped response).
pub const SECONDARY_BASE_URL: &str = "https://api.quotable.io/random";

// =============================================================================
// Config File Schema
// =============================================================================

/// On-disk TOML schema. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub primary_url: Option<String>,
    #[serde(default)]
    pub secondary_url: Option<String>,
}

impl ConfigFile {
    /// Read and parse the config file at `path`.
    ///
    /// A missing file is not an error; it yields the default (empty)
    /// config.
    ///
    /// # Errors
    ///
    /// Returns [`QfetchError::ConfigParse`] on malformed TOML and
    /// [`QfetchError::Io`] if an existing file cannot be read.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| QfetchError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

// =============================================================================
// Environment Overrides
// =============================================================================

/// Environment-variable overrides, collected once so resolution can be
/// tested without mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_key: Option<String>,
    pub primary_url: Option<String>,
    pub secondary_url: Option<String>,
}

impl EnvOverrides {
    /// Snapshot the relevant environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_env(ENV_API_KEY),
            primary_url: non_empty_env(ENV_PRIMARY_URL),
            secondary_url: non_empty_env(ENV_SECONDARY_URL),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Immutable resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Primary-provider credential; `None` means secondary-only mode.
    pub api_key: Option<String>,
    /// Primary provider endpoint URL.
    pub primary_url: String,
    /// Secondary provider endpoint URL.
    pub secondary_url: String,
}

impl Config {
    /// Load configuration from the default (or `QFETCH_CONFIG`-overridden)
    /// config file plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let file = ConfigFile::load_from(&config_file_path())?;
        Ok(Self::resolve(file, EnvOverrides::from_env()))
    }

    /// Resolve a config file and environment overrides into a final
    /// configuration.
    #[must_use]
    pub fn resolve(file: ConfigFile, env: EnvOverrides) -> Self {
        let api_key = env
            .api_key
            .or(file.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Self {
            api_key,
            primary_url: env
                .primary_url
                .or(file.primary_url)
                .unwrap_or_else(|| PRIMARY_BASE_URL.to_string()),
            secondary_url: env
                .secondary_url
                .or(file.secondary_url)
                .unwrap_or_else(|| SECONDARY_BASE_URL.to_string()),
        }
    }

    /// Whether a primary-provider credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(ConfigFile::default(), EnvOverrides::default())
    }
}

/// Path of the config file: `QFETCH_CONFIG` if set, else the platform
/// config directory.
#[must_use]
pub fn config_file_path() -> PathBuf {
    if let Some(path) = non_empty_env(ENV_CONFIG) {
        return PathBuf::from(path);
    }

    ProjectDirs::from("", "", "qfetch").map_or_else(
        || PathBuf::from("qfetch.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}
