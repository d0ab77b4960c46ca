//! SQLite connector implementation

use crate::error::{DbError, DbResult};
use crate::traits::{DatabaseConnector, Dialect};
use crate::value::{Row, Value};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection};
use std::path::Path;

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Integer(n) => ToSqlOutput::Borrowed(ValueRef::Integer(*n)),
            Value::Real(n) => ToSqlOutput::Borrowed(ValueRef::Real(*n)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

fn from_sqlite(value: rusqlite::types::Value) -> Value {
    use rusqlite::types::Value as SqliteValue;
    match value {
        SqliteValue::Null => Value::Null,
        SqliteValue::Integer(n) => Value::Integer(n),
        SqliteValue::Real(n) => Value::Real(n),
        SqliteValue::Text(s) => Value::Text(s),
        SqliteValue::Blob(b) => Value::Text(String::from_utf8_lossy(&b).into_owned()),
    }
}

/// SQLite connector
pub struct SqliteConnector {
    conn: Connection,
}

impl SqliteConnector {
    /// Create a new in-memory SQLite connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new SQLite connection from a file path
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

impl DatabaseConnector for SqliteConnector {
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

    fn insert(&self, sql: &str, params: &[Value], _id_column: &str) -> DbResult<i64> {
        let changed = self.execute(sql, params)?;
        if changed == 0 {
            return Err(DbError::NoGeneratedId(format!("no row inserted: {sql}")));
        }
        match self.conn.last_insert_rowid() {
            0 => Err(DbError::NoGeneratedId(sql.to_string())),
            id => Ok(id),
        }
    }

    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                let col_count = row.as_ref().column_count();
                (0..col_count)
                    .map(|i| row.get::<_, rusqlite::types::Value>(i).map(from_sqlite))
                    .collect::<rusqlite::Result<Vec<_>>>()
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
        Dialect::Sqlite
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
