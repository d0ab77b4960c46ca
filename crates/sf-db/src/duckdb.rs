//! DuckDB connector implementation

use crate::error::{DbError, DbResult};
use crate::traits::{DatabaseConnector, Dialect};
use crate::value::{Row, Value};
use duckdb::types::{ToSqlOutput, Value as DuckValue};
use duckdb::{params_from_iter, Connection};
use std::path::Path;

impl duckdb::ToSql for Value {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(match self {
            Value::Null => DuckValue::Null,
            Value::Integer(n) => DuckValue::BigInt(*n),
            Value::Real(n) => DuckValue::Double(*n),
            Value::Text(s) => DuckValue::Text(s.clone()),
        }))
    }
}

fn from_duckdb(value: DuckValue) -> Value {
    match value {
        DuckValue::Null => Value::Null,
        DuckValue::Boolean(b) => Value::Integer(i64::from(b)),
        DuckValue::TinyInt(n) => Value::Integer(n.into()),
        DuckValue::SmallInt(n) => Value::Integer(n.into()),
        DuckValue::Int(n) => Value::Integer(n.into()),
        DuckValue::BigInt(n) => Value::Integer(n),
        DuckValue::UTinyInt(n) => Value::Integer(n.into()),
        DuckValue::USmallInt(n) => Value::Integer(n.into()),
        DuckValue::UInt(n) => Value::Integer(n.into()),
        DuckValue::Float(n) => Value::Real(n.into()),
        DuckValue::Double(n) => Value::Real(n),
        DuckValue::Text(s) => Value::Text(s),
        other => Value::Text(format!("{other:?}")),
    }
}

/// DuckDB connector
pub struct DuckDbConnector {
    conn: Connection,
}

impl DuckDbConnector {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }
}

impl DatabaseConnector for DuckDbConnector {
    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize> {
        self.conn
            .execute(sql, params_from_iter(params.iter()))
            .map_err(|e| DbError::ExecutionError(format!("{e}: {sql}")))
    }

    /// DuckDB has no last-insert-rowid; the id comes back through a
    /// `RETURNING` clause appended to `sql`.
    fn insert(&self, sql: &str, params: &[Value], id_column: &str) -> DbResult<i64> {
        let returning = format!(
            "{} RETURNING {id_column}",
            sql.trim_end().trim_end_matches(';')
        );
        let id: Option<i64> = self
            .conn
            .query_row(&returning, params_from_iter(params.iter()), |row| row.get(0))
            .map_err(|e| match e {
                duckdb::Error::QueryReturnedNoRows => DbError::NoGeneratedId(sql.to_string()),
                e => DbError::ExecutionError(format!("{e}: {sql}")),
            })?;
        id.ok_or_else(|| DbError::NoGeneratedId(sql.to_string()))
    }

    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?;
        // column_count() on the statement panics before execution, so it is
        // read from each row instead.
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                let col_count = row.as_ref().column_count();
                (0..col_count)
                    .map(|i| row.get::<_, DuckValue>(i).map(from_duckdb))
                    .collect::<duckdb::Result<Vec<_>>>()
                    .map(Row::new)
            })
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::QueryError(format!("row error: {e}")))?;
        Ok(rows)
    }

    fn probe(&self, sql: &str) -> DbResult<i64> {
        self.conn
            .query_row(sql, [], |row| row.get::<_, i64>(0))
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))
    }

    fn dialect(&self) -> Dialect {
        Dialect::DuckDb
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
