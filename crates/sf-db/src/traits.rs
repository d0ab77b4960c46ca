//! Database connector trait definition

use crate::error::DbResult;
use crate::value::{Row, Value};

/// SQL dialect spoken by a connector.
///
/// The migration engine only needs this to pick dialect-specific DDL for its
/// own bookkeeping table; migration scripts are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    DuckDb,
}

/// Database connector consumed by the migration engine.
///
/// All calls are synchronous and run to completion. Implementations never
/// open transactions on their own.
pub trait DatabaseConnector {
    /// Execute opaque, possibly multi-statement SQL text
    fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute one parameterised statement, returns affected rows
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize>;

    /// Execute one parameterised `INSERT` and return the generated value of
    /// `id_column` for the new row.
    ///
    /// `sql` must be a single statement without a trailing `RETURNING`.
    fn insert(&self, sql: &str, params: &[Value], id_column: &str) -> DbResult<i64>;

    /// Run a query and return every row
    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>>;

    /// Run a query returning a single integer (count or existence check)
    fn probe(&self, sql: &str) -> DbResult<i64>;

    /// SQL dialect of this connector
    fn dialect(&self) -> Dialect;
}

/// Decode a result row into a typed value.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> DbResult<Self>;
}

/// Run `sql` and decode every row into `T`.
pub fn query_as<T: FromRow>(
    db: &dyn DatabaseConnector,
    sql: &str,
    params: &[Value],
) -> DbResult<Vec<T>> {
    db.query(sql, params)?.iter().map(T::from_row).collect()
}
