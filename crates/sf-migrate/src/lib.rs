//! Migration engine for Schemaflow.
//!
//! Applies and reverts ordered `.sql` scripts against a database and keeps
//! a ledger table (`schema_script`) of every attempt, so repeated runs only
//! apply what has not succeeded yet.
//!
//! The ledger and the target schema are shared state with no locking: two
//! migrators running against the same database at the same time can apply a
//! script twice or interleave ledger writes. Callers must serialise runs.

pub mod bootstrap;
pub mod error;
pub mod ledger;
pub mod migrator;
pub mod progress;
pub mod record;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bootstrap::{Applier, Bootstrapper};
pub use error::{MigrateError, MigrateResult};
pub use ledger::{ledger_table_exists, Ledger, ScriptLedger, LEDGER_TABLE};
pub use migrator::{Command, Migrator};
pub use progress::{NoProgress, ProgressSink};
pub use record::{script_applied, ExecutionStatus, MigrationRecord, DATETIME_FORMAT};
