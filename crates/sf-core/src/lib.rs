//! sf-core - Core library for Schemaflow
//!
//! This crate provides the migration catalog scanner, the directional
//! script parser, configuration parsing, and the shared error type used
//! across all Schemaflow components.

pub mod catalog;
pub mod config;
pub mod error;
pub mod script;
pub mod script_name;

pub use catalog::{scan, scan_reverse, MIGRATION_EXTENSION};
pub use config::{Config, DatabaseConfig, DbType};
pub use error::{CoreError, CoreResult};
pub use script::{read, Direction};
pub use script_name::ScriptName;
