//! Recreate command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, UpgradeArgs};
use crate::commands::common;

/// Execute the recreate command: revert everything, reset the ledger, upgrade.
pub(crate) fn execute(args: &UpgradeArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let dir = common::migrations_dir(&config, args.path.as_deref())?;
    let version = common::app_version(args.app_version.as_deref(), &config);

    let db = common::open_database(&config)?;
    let migrator = common::build_migrator(db.as_ref(), &config);

    let applied = migrator
        .recreate(&dir, version)
        .with_context(|| format!("Recreate of {} failed", dir.display()))?;

    println!("Recreated schema: applied {applied} migration(s) from {}", dir.display());
    Ok(())
}
