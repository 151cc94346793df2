use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod config;
mod game;
mod logging;
mod session;
mod ui;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    app::run(&cli)
}
