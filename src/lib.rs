//! qfetch - random quote fetcher.
//!
//! Fetches a random quote from a primary quote API (credentialed) with
//! silent fallback to a secondary API, with request supersession, a
//! safety timeout, and a loading animation in interactive mode.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod providers;
pub mod render;
pub mod tui;
pub mod util;

pub use error::{ExitCode, QfetchError, Result};
