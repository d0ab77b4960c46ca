//! Shared utilities for CLI commands

use anyhow::{bail, Context, Result};
use sf_core::Config;
use sf_db::DatabaseConnector;
use sf_migrate::Migrator;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;
use crate::progress::BarProgress;

/// Load the config file (explicit `--config` or `schemaflow.yml` in the
/// current directory) and apply command-line overrides.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => Config::load_or_default(Path::new(".")).context("Failed to load config")?,
    };

    if let Some(database) = &global.database {
        config.database.path = database.clone();
    }
    if let Some(db_type) = global.db_type {
        config.database.db_type = db_type.into();
    }
    if global.no_progress {
        config.progress = false;
    }

    config.validate().context("Invalid configuration")?;
    log::debug!(
        "Using {} database at {}",
        config.database.db_type,
        config.database.path
    );
    Ok(config)
}

/// Resolve the migration directory and make sure it exists.
///
/// Runs before any database access so a typo never creates a ledger table.
pub(crate) fn migrations_dir(config: &Config, path: Option<&str>) -> Result<PathBuf> {
    let dir = path
        .map(PathBuf::from)
        .unwrap_or_else(|| config.migrations_dir());

    if !dir.is_dir() {
        bail!("Migration directory not found: {}", dir.display());
    }
    Ok(dir)
}

/// Open the configured database.
pub(crate) fn open_database(config: &Config) -> Result<Box<dyn DatabaseConnector>> {
    if config.database.is_in_memory() {
        log::warn!(
            "Using an in-memory {} database; changes are lost when sf exits (set --database or database.path)",
            config.database.db_type
        );
    }
    sf_db::connect(&config.database).with_context(|| {
        format!(
            "Failed to open {} database at {}",
            config.database.db_type, config.database.path
        )
    })
}

/// Build a migrator over `db`, attaching a progress bar when enabled.
pub(crate) fn build_migrator<'db>(db: &'db dyn DatabaseConnector, config: &Config) -> Migrator<'db> {
    let migrator = Migrator::new(db);
    if config.progress {
        migrator.with_progress(BarProgress::new())
    } else {
        migrator
    }
}

/// App version from the flag, falling back to the config value.
pub(crate) fn app_version<'a>(flag: Option<&'a str>, config: &'a Config) -> &'a str {
    flag.unwrap_or(config.app_version.as_str())
}
