//! Dynamically typed column values and rows.

use crate::error::{DbError, DbResult};
use std::fmt;

/// A single column value, as bound into or read out of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// One result row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at `idx`.
    pub fn get(&self, idx: usize) -> DbResult<&Value> {
        self.values.get(idx).ok_or_else(|| DbError::Decode {
            column: idx,
            message: format!("row has only {} columns", self.values.len()),
        })
    }

    /// Integer column. Text holding a number is accepted, since SQLite and
    /// DuckDB disagree about how some declared types come back.
    pub fn get_i64(&self, idx: usize) -> DbResult<i64> {
        match self.get(idx)? {
            Value::Integer(n) => Ok(*n),
            Value::Text(s) => s.trim().parse().map_err(|_| DbError::Decode {
                column: idx,
                message: format!("expected integer, found '{s}'"),
            }),
            other => Err(DbError::Decode {
                column: idx,
                message: format!("expected integer, found {other:?}"),
            }),
        }
    }

    /// Non-null text column.
    pub fn get_string(&self, idx: usize) -> DbResult<String> {
        match self.get(idx)? {
            Value::Null => Err(DbError::Decode {
                column: idx,
                message: "expected text, found null".to_string(),
            }),
            value => Ok(value.to_string()),
        }
    }

    /// Nullable text column; `NULL` becomes `None`.
    pub fn get_opt_string(&self, idx: usize) -> DbResult<Option<String>> {
        match self.get(idx)? {
            Value::Null => Ok(None),
            value => Ok(Some(value.to_string())),
        }
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
