//! Error types for the migration engine.

use sf_core::CoreError;
use sf_db::DbError;
use thiserror::Error;

/// Migration engine errors.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Missing or out-of-range input to a ledger operation (M001).
    #[error("[M001] Invalid ledger input: {0}")]
    Validation(String),

    /// Ledger rows could not be read (M002).
    #[error("[M002] Ledger read failed: {0}")]
    LedgerRead(String),

    /// Ledger table could not be written, created, or dropped (M003).
    #[error("[M003] Ledger write failed: {0}")]
    LedgerWrite(String),

    /// A migration script failed to execute (M004).
    #[error("[M004] Failed to execute script {script}: {source}")]
    Apply {
        script: String,
        #[source]
        source: DbError,
    },

    /// A script failed and recording the failure failed too (M005).
    #[error("[M005] {0}")]
    Upgrade(String),

    /// Unknown command name passed to [`crate::Migrator::execute`] (M006).
    #[error("[M006] command '{0}' not found")]
    UnknownCommand(String),

    /// Catalog scan or script read failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;
