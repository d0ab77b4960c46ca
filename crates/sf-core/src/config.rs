//! Configuration types and parsing for schemaflow.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names probed by [`Config::load_from_dir`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["schemaflow.yml", "schemaflow.yaml"];

const DEFAULT_DB_PATH: &str = ":memory:";

/// Main configuration from schemaflow.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the `.sql` migration scripts
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,

    /// Free-text tag written to every ledger row (build or release id)
    #[serde(default)]
    pub app_version: String,

    /// Draw a progress bar while migrating
    #[serde(default = "default_true")]
    pub progress: bool,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_path: default_migrations_path(),
            app_version: String::new(),
            progress: true,
            database: DatabaseConfig::default(),
        }
    }
}

/// Database type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// SQLite (default)
    #[default]
    Sqlite,
    /// DuckDB
    DuckDb,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::Sqlite => write!(f, "sqlite"),
            DbType::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database type (sqlite or duckdb)
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database file path, or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether this points at a throwaway in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.path == DEFAULT_DB_PATH
    }
}

fn default_migrations_path() -> String {
    "migrations".to_string()
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory.
    /// Looks for schemaflow.yml or schemaflow.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Like [`load_from_dir`](Self::load_from_dir), but falls back to the
    /// defaults when the directory has no config file.
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Migration directory as a path
    pub fn migrations_dir(&self) -> PathBuf {
        PathBuf::from(&self.migrations_path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.migrations_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_path cannot be empty".to_string(),
            });
        }

        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
