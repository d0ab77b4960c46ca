//! Ledger table lifecycle and script execution.

use crate::error::{MigrateError, MigrateResult};
use sf_core::script::read as read_script;
use sf_core::{Direction, ScriptName};
use sf_db::{DatabaseConnector, Dialect};

/// Ledger DDL for SQLite.
const SQLITE_CREATE: &str = "CREATE TABLE IF NOT EXISTS schema_script (
  id               INTEGER PRIMARY KEY AUTOINCREMENT,
  script_name      TEXT NOT NULL,
  executed_at      DATETIME NOT NULL,
  execution_status VARCHAR(100) NOT NULL,
  app_version      CHAR(30) NULL,
  error_msg        TEXT NULL
);";

/// Ledger DDL for DuckDB. DuckDB has no `AUTOINCREMENT`, so ids come from a
/// sequence, and `executed_at` keeps the same text format as SQLite.
const DUCKDB_CREATE: &str = "CREATE SEQUENCE IF NOT EXISTS schema_script_id_seq START 1;
CREATE TABLE IF NOT EXISTS schema_script (
  id               BIGINT PRIMARY KEY DEFAULT nextval('schema_script_id_seq'),
  script_name      TEXT NOT NULL,
  executed_at      VARCHAR NOT NULL,
  execution_status VARCHAR(100) NOT NULL,
  app_version      VARCHAR(30) NULL,
  error_msg        TEXT NULL
);";

const SQLITE_DROP: &str = "DROP TABLE IF EXISTS schema_script;";

const DUCKDB_DROP: &str = "DROP TABLE IF EXISTS schema_script;
DROP SEQUENCE IF EXISTS schema_script_id_seq;";

/// Run migration scripts and manage the ledger table itself.
pub trait Applier {
    /// Execute the `up` block of `script`
    fn apply_script(&self, script: &ScriptName) -> MigrateResult<()>;

    /// Execute the `down` block of `script`
    fn revert_script(&self, script: &ScriptName) -> MigrateResult<()>;

    /// Create the ledger table if it does not exist
    fn init(&self) -> MigrateResult<()>;

    /// Drop the ledger table and create it again
    fn reinit(&self) -> MigrateResult<()>;
}

/// [`Applier`] that executes scripts directly on a connector.
pub struct Bootstrapper<'db> {
    db: &'db dyn DatabaseConnector,
}

impl<'db> Bootstrapper<'db> {
    pub fn new(db: &'db dyn DatabaseConnector) -> Self {
        Self { db }
    }

    fn run(&self, script: &ScriptName, direction: Direction) -> MigrateResult<()> {
        let block = read_script(script.path(), direction)?;
        if block.trim().is_empty() {
            log::debug!("{script} has no {direction} block, nothing to execute");
            return Ok(());
        }

        self.db
            .execute_batch(&block)
            .map_err(|source| MigrateError::Apply {
                script: script.to_string(),
                source,
            })
    }
}

impl Applier for Bootstrapper<'_> {
    fn apply_script(&self, script: &ScriptName) -> MigrateResult<()> {
        self.run(script, Direction::Up)
    }

    fn revert_script(&self, script: &ScriptName) -> MigrateResult<()> {
        self.run(script, Direction::Down)
    }

    fn init(&self) -> MigrateResult<()> {
        let ddl = match self.db.dialect() {
            Dialect::Sqlite => SQLITE_CREATE,
            Dialect::DuckDb => DUCKDB_CREATE,
        };
        self.db
            .execute_batch(ddl)
            .map_err(|e| MigrateError::LedgerWrite(format!("failed to create ledger table: {e}")))
    }

    fn reinit(&self) -> MigrateResult<()> {
        let drop = match self.db.dialect() {
            Dialect::Sqlite => SQLITE_DROP,
            Dialect::DuckDb => DUCKDB_DROP,
        };
        self.db
            .execute_batch(drop)
            .map_err(|e| MigrateError::LedgerWrite(format!("failed to drop ledger table: {e}")))?;
        self.init()
    }
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;
