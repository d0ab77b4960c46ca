//! Schemaflow CLI - apply and revert ordered SQL migrations

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod progress;

use cli::Cli;
use commands::{recreate, revert, status, upgrade};

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.global.verbose);

    match &cli.command {
        cli::Commands::Upgrade(args) => upgrade::execute(args, &cli.global),
        cli::Commands::Revert(args) => revert::execute(args, &cli.global),
        cli::Commands::Recreate(args) => recreate::execute(args, &cli.global),
        cli::Commands::Status(args) => status::execute(args, &cli.global),
    }
}
