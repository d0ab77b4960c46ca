//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use sf_core::DbType;

/// Schemaflow - apply and revert ordered SQL migration scripts
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: schemaflow.yml in the current directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database path (file path or :memory:)
    #[arg(short, long, global = true, env = "SF_DATABASE")]
    pub database: Option<String>,

    /// Override database type
    #[arg(long, global = true, value_enum)]
    pub db_type: Option<DbTypeArg>,

    /// Disable the progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,
}

/// Database types selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbTypeArg {
    /// SQLite
    Sqlite,
    /// DuckDB
    Duckdb,
}

impl From<DbTypeArg> for DbType {
    fn from(arg: DbTypeArg) -> Self {
        match arg {
            DbTypeArg::Sqlite => DbType::Sqlite,
            DbTypeArg::Duckdb => DbType::DuckDb,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply every migration that has not been applied yet
    Upgrade(UpgradeArgs),

    /// Revert the most recently named applied migrations
    Revert(RevertArgs),

    /// Revert everything, reset the ledger, and upgrade again
    Recreate(UpgradeArgs),

    /// Show the migration ledger
    Status(StatusArgs),
}

/// Arguments for the upgrade and recreate commands
#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Migration directory (default: migrations_path from config)
    pub path: Option<String>,

    /// Version tag recorded with each ledger row
    #[arg(short = 'a', long)]
    pub app_version: Option<String>,
}

/// Arguments for the revert command
#[derive(Args, Debug)]
pub struct RevertArgs {
    /// Migration directory (default: migrations_path from config)
    pub path: Option<String>,

    /// Number of migrations to revert
    #[arg(short = 'n', long, default_value_t = 1, conflicts_with = "all")]
    pub count: usize,

    /// Revert every applied migration
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show only the ledger row with this id
    #[arg(long)]
    pub id: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: StatusOutput,
}

/// Status output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutput {
    /// Human-readable table
    Text,
    /// JSON array of ledger rows
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
