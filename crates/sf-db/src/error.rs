//! Error types for sf-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Query error (D003)
    #[error("[D003] SQL query failed: {0}")]
    QueryError(String),

    /// Insert succeeded but produced no row id (D004)
    #[error("[D004] Insert returned no generated id: {0}")]
    NoGeneratedId(String),

    /// Column value could not be decoded into the requested type (D005)
    #[error("[D005] Failed to decode column {column}: {message}")]
    Decode { column: usize, message: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
