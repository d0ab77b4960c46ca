//! sf-db - Database connector layer for Schemaflow
//!
//! This crate provides the `DatabaseConnector` trait consumed by the
//! migration engine, and implementations for SQLite and DuckDB.

pub mod duckdb;
pub mod error;
pub mod sqlite;
pub mod traits;
pub mod value;

pub use self::duckdb::DuckDbConnector;
pub use error::{DbError, DbResult};
pub use sqlite::SqliteConnector;
pub use traits::{query_as, DatabaseConnector, Dialect, FromRow};
pub use value::{Row, Value};

use sf_core::{DatabaseConfig, DbType};

/// Open the connector described by `config`.
pub fn connect(config: &DatabaseConfig) -> DbResult<Box<dyn DatabaseConnector>> {
    log::debug!("Opening {} database at {}", config.db_type, config.path);
    Ok(match config.db_type {
        DbType::Sqlite => Box::new(SqliteConnector::new(&config.path)?),
        DbType::DuckDb => Box::new(DuckDbConnector::new(&config.path)?),
    })
}
