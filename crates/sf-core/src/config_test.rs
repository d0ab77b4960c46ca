use super::*;

#[test]
fn test_parse_minimal_config() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.migrations_path, "migrations");
    assert_eq!(config.app_version, "");
    assert!(config.progress);
    assert_eq!(config.database.db_type, DbType::Sqlite);
    assert_eq!(config.database.path, ":memory:");
    assert!(config.database.is_in_memory());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
migrations_path: db/migrations
app_version: "1.4.2"
progress: false
database:
  type: duckdb
  path: ./warehouse.duckdb
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.migrations_dir(), PathBuf::from("db/migrations"));
    assert_eq!(config.app_version, "1.4.2");
    assert!(!config.progress);
    assert_eq!(config.database.db_type, DbType::DuckDb);
    assert_eq!(config.database.path, "./warehouse.duckdb");
    assert!(!config.database.is_in_memory());
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("migration_path: typo\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_db_type_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("database:\n  type: oracle\n");
    assert!(result.is_err());
}

#[test]
fn test_db_type_display() {
    assert_eq!(DbType::Sqlite.to_string(), "sqlite");
    assert_eq!(DbType::DuckDb.to_string(), "duckdb");
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("schemaflow.yml"),
        "migrations_path: sql\napp_version: v2\n",
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.migrations_path, "sql");
    assert_eq!(config.app_version, "v2");
}

#[test]
fn test_load_from_dir_yaml_extension() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schemaflow.yaml"), "app_version: v3\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.app_version, "v3");
}

#[test]
fn test_load_from_dir_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path()).unwrap();
    assert_eq!(config.migrations_path, "migrations");
}

#[test]
fn test_load_rejects_empty_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemaflow.yml");
    std::fs::write(&path, "database:\n  path: \"\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_load_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemaflow.yml");
    std::fs::write(&path, "migrations_path: [unclosed\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}
