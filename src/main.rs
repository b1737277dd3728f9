//! Strictly Guess - terminal number guessing game.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_guess_tui::{Settings, run_plain_stdio, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    let command = cli.command.unwrap_or_default();
    match command {
        Command::Tui => {
            init_file_logging(settings.log_file(), command.default_log_filter())?;
            info!(seed = ?cli.seed, "Launching terminal UI");
            run_tui(&settings, cli.seed)
        }
        Command::Plain => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(command.default_log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();
            info!(seed = ?cli.seed, "Launching plain mode");
            run_plain_stdio(cli.seed).context("plain mode I/O failed")
        }
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_file_logging(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
