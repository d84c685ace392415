mod commands;
mod ops;
mod reports;

use std::str::FromStr;

use clap::Parser;
use eyre::Result;
use log::{LevelFilter, debug};

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            cli.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(log_level:?; "Starting jsxgen");

    cli.run()
}
