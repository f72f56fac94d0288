//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Random quote fetcher - pull quotes from public quote APIs.
#[derive(Parser, Debug)]
#[command(name = "qfetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one quote and print it (default command)
    Fetch(FetchArgs),

    /// Interactive terminal UI
    Tui(TuiArgs),
}

/// Arguments for the `fetch` command.
#[derive(Parser, Debug, Default, Clone)]
pub struct FetchArgs {
    /// Tag or category to request (e.g. "wisdom")
    #[arg(long, short = 't', value_name = "TAG")]
    pub tag: Option<String>,
}

impl FetchArgs {
    /// Tag to request, empty when none given.
    #[must_use]
    pub fn effective_tag(&self) -> &str {
        self.tag.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Arguments for the `tui` command.
#[derive(Parser, Debug, Default, Clone)]
pub struct TuiArgs {
    /// Initial tag or category for the automatic first fetch
    #[arg(long, short = 't', value_name = "TAG")]
    pub tag: Option<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
