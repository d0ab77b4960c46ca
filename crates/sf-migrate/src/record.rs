//! Ledger row model.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sf_db::{DbError, DbResult, FromRow, Row};
use std::fmt;
use std::str::FromStr;

/// Timestamp format of the `executed_at` column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Outcome of one script execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Error,
}

impl ExecutionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Error => "error",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ExecutionStatus::Success),
            "error" => Ok(ExecutionStatus::Error),
            other => Err(format!("unknown execution status '{other}'")),
        }
    }
}

/// One attempted script execution, as stored in `schema_script`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationRecord {
    /// Surrogate key; `0` until the ledger assigns one on insert
    pub id: i64,
    pub script_name: String,
    pub executed_at: DateTime<Utc>,
    pub status: ExecutionStatus,
    /// Empty unless `status` is [`ExecutionStatus::Error`]
    pub error_msg: String,
    pub app_version: String,
}

impl MigrationRecord {
    /// A record for a script that applied cleanly, stamped now.
    pub fn success(script_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            id: 0,
            script_name: script_name.into(),
            executed_at: Utc::now().trunc_subsecs(0),
            status: ExecutionStatus::Success,
            error_msg: String::new(),
            app_version: app_version.into(),
        }
    }

    /// A record for a script that failed with `error_msg`, stamped now.
    pub fn failure(
        script_name: impl Into<String>,
        app_version: impl Into<String>,
        error_msg: impl Into<String>,
    ) -> Self {
        Self {
            status: ExecutionStatus::Error,
            error_msg: error_msg.into(),
            ..Self::success(script_name, app_version)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Success
    }

    /// `executed_at` rendered in [`DATETIME_FORMAT`].
    pub fn executed_at_formatted(&self) -> String {
        self.executed_at.format(DATETIME_FORMAT).to_string()
    }
}

fn parse_executed_at(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc)))
        .ok()
}

/// Column order expected by the `FromRow` impl below.
pub(crate) const RECORD_COLUMNS: &str =
    "id, script_name, executed_at, execution_status, error_msg, app_version";

impl FromRow for MigrationRecord {
    fn from_row(row: &Row) -> DbResult<Self> {
        let raw_executed_at = row.get_string(2)?;
        let executed_at = parse_executed_at(&raw_executed_at).ok_or_else(|| DbError::Decode {
            column: 2,
            message: format!("invalid timestamp '{raw_executed_at}'"),
        })?;
        let status = row
            .get_string(3)?
            .parse::<ExecutionStatus>()
            .map_err(|message| DbError::Decode { column: 3, message })?;

        Ok(Self {
            id: row.get_i64(0)?,
            script_name: row.get_string(1)?,
            executed_at,
            status,
            error_msg: row.get_opt_string(4)?.unwrap_or_default(),
            app_version: row
                .get_opt_string(5)?
                .map(|v| v.trim_end().to_string())
                .unwrap_or_default(),
        })
    }
}

/// Whether `script_name` has at least one successful row in `records`.
///
/// Rows with status `error` never count: a script that failed is attempted
/// again on the next upgrade.
pub fn script_applied(records: &[MigrationRecord], script_name: &str) -> bool {
    records
        .iter()
        .any(|r| r.script_name == script_name && r.is_success())
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
