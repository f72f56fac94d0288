//! qfetch - random quote fetcher.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use qfetch::cli::{Cli, Commands};
use qfetch::core::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(logging::level_from_env)
        .unwrap_or_default();
    let log_format = logging::format_from_env().unwrap_or_default();
    let log_file = logging::file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}: {e}", e.category());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> qfetch::Result<()> {
    let format = cli.effective_format();
    let pretty = cli.pretty;
    let no_color = cli.no_color || !qfetch::util::env::should_use_color(cli.no_color);

    match cli.command {
        // Fetch a quote by default, like the trigger firing on load.
        None => {
            let args = qfetch::cli::args::FetchArgs::default();
            qfetch::cli::fetch::execute(&args, format, pretty, no_color).await
        }

        Some(Commands::Fetch(args)) => {
            qfetch::cli::fetch::execute(&args, format, pretty, no_color).await
        }

        Some(Commands::Tui(args)) => qfetch::tui::run(&args).await,
    }
}
