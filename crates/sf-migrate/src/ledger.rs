//! Execution ledger backed by the `schema_script` table.
//!
//! One row per attempted script execution. Rows are only ever appended by
//! upgrades and deleted by reverts; nothing is updated in place.

use crate::error::{MigrateError, MigrateResult};
use crate::record::{MigrationRecord, RECORD_COLUMNS};
use sf_db::{query_as, DatabaseConnector, Value};

/// Name of the ledger table.
pub const LEDGER_TABLE: &str = "schema_script";

/// Append, list, and remove ledger rows.
///
/// [`ScriptLedger`] is the database-backed implementation; the migrator only
/// depends on this trait.
pub trait Ledger {
    /// Persist `record` and set its `id` to the generated key
    fn add(&self, record: &mut MigrationRecord) -> MigrateResult<()>;

    /// Every row, in insertion order
    fn get_all(&self) -> MigrateResult<Vec<MigrationRecord>>;

    /// Delete every row for `script_name`
    fn remove(&self, script_name: &str) -> MigrateResult<()>;
}

/// Whether the ledger table can be queried.
///
/// Any probe failure counts as "missing", which is what lets the first
/// upgrade against a fresh database create the table itself.
pub fn ledger_table_exists(db: &dyn DatabaseConnector) -> bool {
    match db.probe(&format!("SELECT COUNT(id) FROM {LEDGER_TABLE}")) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("Ledger table probe failed, treating as missing: {e}");
            false
        }
    }
}

/// Ledger stored in the `schema_script` table of `db`.
pub struct ScriptLedger<'db> {
    db: &'db dyn DatabaseConnector,
}

impl<'db> ScriptLedger<'db> {
    pub fn new(db: &'db dyn DatabaseConnector) -> Self {
        Self { db }
    }

    /// Fetch the row with surrogate key `id`.
    pub fn get_by_id(&self, id: i64) -> MigrateResult<MigrationRecord> {
        if id < 1 {
            return Err(MigrateError::Validation(
                "id must be greater than zero".to_string(),
            ));
        }

        let sql = format!("SELECT {RECORD_COLUMNS} FROM {LEDGER_TABLE} WHERE id = ?");
        let mut rows: Vec<MigrationRecord> = query_as(self.db, &sql, &[Value::Integer(id)])
            .map_err(|e| MigrateError::LedgerRead(format!("get by id {id} failed: {e}")))?;

        if rows.is_empty() {
            return Err(MigrateError::LedgerRead(format!("no ledger row with id {id}")));
        }
        Ok(rows.swap_remove(0))
    }
}

impl Ledger for ScriptLedger<'_> {
    fn add(&self, record: &mut MigrationRecord) -> MigrateResult<()> {
        if record.script_name.is_empty() {
            return Err(MigrateError::Validation(
                "record must have a script name".to_string(),
            ));
        }

        let sql = format!(
            "INSERT INTO {LEDGER_TABLE} (script_name, executed_at, execution_status, error_msg, app_version) \
             VALUES (?, ?, ?, ?, ?)"
        );
        let params = [
            Value::from(record.script_name.as_str()),
            Value::from(record.executed_at_formatted()),
            Value::from(record.status.as_str()),
            Value::from(record.error_msg.as_str()),
            Value::from(record.app_version.as_str()),
        ];

        record.id = self
            .db
            .insert(&sql, &params, "id")
            .map_err(|e| MigrateError::LedgerWrite(format!("add failed: {e}")))?;
        Ok(())
    }

    fn get_all(&self) -> MigrateResult<Vec<MigrationRecord>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM {LEDGER_TABLE} ORDER BY id");
        query_as(self.db, &sql, &[])
            .map_err(|e| MigrateError::LedgerRead(format!("get all failed: {e}")))
    }

    fn remove(&self, script_name: &str) -> MigrateResult<()> {
        if script_name.is_empty() {
            return Err(MigrateError::Validation(
                "script name must be provided".to_string(),
            ));
        }

        let sql = format!("DELETE FROM {LEDGER_TABLE} WHERE script_name = ?");
        self.db
            .execute(&sql, &[Value::from(script_name)])
            .map_err(|e| MigrateError::LedgerWrite(format!("remove {script_name} failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
