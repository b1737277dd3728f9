//! Command-line interface for strictly_guess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Guess - find the secret number in ten tries
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Number guessing game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "strictly_guess.toml")]
    pub config: PathBuf,

    /// Seed for reproducible targets
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the log file of the terminal UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Front end to run (terminal UI if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Run the terminal UI
    #[default]
    Tui,

    /// Read guesses line by line from stdin
    Plain,
}

impl Command {
    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Plain mode logs to the terminal it plays on, so it stays at `warn`.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Command::Tui => "info,strictly_guess=debug,strictly_guess_tui=debug",
            Command::Plain => "warn",
        }
    }
}
