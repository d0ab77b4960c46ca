//! Upgrade / revert / recreate orchestration.
//!
//! Each operation rescans the migration directory and reloads the ledger, so
//! the directory decides what exists and the ledger decides what already
//! ran. Script execution and the ledger write that records it are two
//! separate, non-transactional steps.

use crate::bootstrap::{Applier, Bootstrapper};
use crate::error::{MigrateError, MigrateResult};
use crate::ledger::{ledger_table_exists, Ledger, ScriptLedger};
use crate::progress::{NoProgress, ProgressSink};
use crate::record::{script_applied, MigrationRecord};
use sf_core::{scan, scan_reverse};
use sf_db::DatabaseConnector;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Named operations accepted by [`Migrator::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Upgrade,
    RevertLast,
    RevertAll,
    Recreate,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Upgrade => "upgrade",
            Command::RevertLast => "revert",
            Command::RevertAll => "revert-all",
            Command::Recreate => "recreate",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upgrade" => Ok(Command::Upgrade),
            "revert" => Ok(Command::RevertLast),
            "revert-all" => Ok(Command::RevertAll),
            "recreate" => Ok(Command::Recreate),
            other => Err(MigrateError::UnknownCommand(other.to_string())),
        }
    }
}

/// Applies and reverts the scripts of one migration directory.
pub struct Migrator<'db> {
    db: &'db dyn DatabaseConnector,
    ledger: Box<dyn Ledger + 'db>,
    applier: Box<dyn Applier + 'db>,
    progress: Box<dyn ProgressSink + 'db>,
}

impl<'db> Migrator<'db> {
    /// Migrator using the `schema_script` ledger and direct script execution
    /// on `db`, without progress output.
    pub fn new(db: &'db dyn DatabaseConnector) -> Self {
        Self::with_parts(
            db,
            Box::new(ScriptLedger::new(db)),
            Box::new(Bootstrapper::new(db)),
        )
    }

    /// Migrator with a custom ledger and applier. `db` is still used to probe
    /// for the ledger table.
    pub fn with_parts(
        db: &'db dyn DatabaseConnector,
        ledger: Box<dyn Ledger + 'db>,
        applier: Box<dyn Applier + 'db>,
    ) -> Self {
        Self {
            db,
            ledger,
            applier,
            progress: Box::new(NoProgress),
        }
    }

    /// Report progress to `sink`.
    pub fn with_progress(mut self, sink: impl ProgressSink + 'db) -> Self {
        self.progress = Box::new(sink);
        self
    }

    /// Run `command` against the scripts in `path`.
    ///
    /// Returns the number of scripts applied or reverted.
    pub fn execute(&self, path: &Path, command: Command, app_version: &str) -> MigrateResult<usize> {
        match command {
            Command::Upgrade => self.upgrade(path, app_version),
            Command::RevertLast => self.revert_last(path),
            Command::RevertAll => self.revert_all(path),
            Command::Recreate => self.recreate(path, app_version),
        }
    }

    /// Apply every script in `path` that has no successful ledger row yet,
    /// in ascending name order. Creates the ledger table on first use.
    ///
    /// Stops at the first failing script; later scripts are not attempted.
    /// The failure is recorded as an `error` row, and a script with only
    /// `error` rows is attempted again on the next call.
    pub fn upgrade(&self, path: &Path, app_version: &str) -> MigrateResult<usize> {
        if !ledger_table_exists(self.db) {
            log::info!("Ledger table not found, creating it");
            self.applier.init()?;
        }

        let executed = self.ledger.get_all()?;
        let scripts = scan(path)?;

        self.progress.start(scripts.len() as u64);
        let mut applied = 0;
        for script in &scripts {
            self.progress.advance();

            if script_applied(&executed, script) {
                log::debug!("Skipping {script}, already applied");
                continue;
            }

            log::debug!("Applying {script}");
            if let Err(apply_err) = self.applier.apply_script(script) {
                let mut failure =
                    MigrationRecord::failure(script.as_str(), app_version, apply_err.to_string());
                return Err(match self.ledger.add(&mut failure) {
                    Ok(()) => apply_err,
                    Err(ledger_err) => {
                        log::warn!("Could not record failure of {script}: {ledger_err}");
                        MigrateError::Upgrade(format!(
                            "original error: {apply_err}, following error: {ledger_err}"
                        ))
                    }
                });
            }

            self.ledger
                .add(&mut MigrationRecord::success(script.as_str(), app_version))?;
            applied += 1;
        }

        self.progress.finish("Schema upgrade finished!");
        log::info!(
            "Upgrade of {} applied {applied} of {} scripts",
            path.display(),
            scripts.len()
        );
        Ok(applied)
    }

    /// Revert the most recently named applied script.
    ///
    /// Calling it repeatedly walks one script further back each time.
    pub fn revert_last(&self, path: &Path) -> MigrateResult<usize> {
        self.revert(path, Some(1))
    }

    /// Revert every applied script in `path`.
    pub fn revert_all(&self, path: &Path) -> MigrateResult<usize> {
        self.revert(path, None)
    }

    /// Revert up to `limit` applied scripts in descending name order, or all
    /// of them when `limit` is `None`. `Some(0)` reverts nothing.
    ///
    /// Each reverted script has all of its ledger rows removed. Stops at the
    /// first failure; scripts reverted before it stay reverted.
    pub fn revert(&self, path: &Path, limit: Option<usize>) -> MigrateResult<usize> {
        if limit == Some(0) {
            return Ok(0);
        }

        let executed = self.ledger.get_all()?;
        let scripts = scan_reverse(path)?;

        let total = limit.unwrap_or(scripts.len());
        self.progress.start(total as u64);
        let mut reverted = 0;
        for script in &scripts {
            self.progress.advance();

            if !script_applied(&executed, script) {
                continue;
            }

            log::debug!("Reverting {script}");
            self.applier.revert_script(script)?;
            self.ledger.remove(script)?;

            reverted += 1;
            if limit.is_some_and(|n| reverted >= n) {
                break;
            }
        }

        self.progress.finish("Schema revert finished!");
        log::info!("Revert of {} reverted {reverted} scripts", path.display());
        Ok(reverted)
    }

    /// Revert everything, drop and recreate the ledger table, then upgrade.
    ///
    /// Rows written to the ledger by anything other than an upgrade of
    /// `path` are gone afterwards. A failing stage aborts the rest without
    /// undoing earlier stages.
    pub fn recreate(&self, path: &Path, app_version: &str) -> MigrateResult<usize> {
        self.revert_all(path)?;
        self.applier.reinit()?;
        self.upgrade(path, app_version)
    }
}

#[cfg(test)]
#[path = "migrator_test.rs"]
mod tests;
