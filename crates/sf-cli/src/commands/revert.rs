//! Revert command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, RevertArgs};
use crate::commands::common;

/// Execute the revert command
pub(crate) fn execute(args: &RevertArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let dir = common::migrations_dir(&config, args.path.as_deref())?;

    let db = common::open_database(&config)?;
    let migrator = common::build_migrator(db.as_ref(), &config);

    let limit = if args.all { None } else { Some(args.count) };
    let reverted = migrator
        .revert(&dir, limit)
        .with_context(|| format!("Revert of {} failed", dir.display()))?;

    println!("Reverted {reverted} migration(s) from {}", dir.display());
    Ok(())
}
