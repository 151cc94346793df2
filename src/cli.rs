//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, long_about = None)]
pub struct Cli {
    /// Write logs to this file (filter with RUST_LOG, default "info").
    /// Logging is off when not given.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Leave the mouse alone; cells are chosen with the keyboard only
    #[arg(long)]
    pub no_mouse: bool,
}
