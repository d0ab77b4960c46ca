use super::*;

#[test]
fn test_in_memory() {
    let db = SqliteConnector::new(":memory:").unwrap();
    assert_eq!(db.dialect(), Dialect::Sqlite);
}

#[test]
fn test_execute_batch_multiple_statements() {
    let db = SqliteConnector::in_memory().unwrap();
    db.execute_batch(
        "\nCREATE TABLE t1 (id INTEGER);\nCREATE TABLE t2 (id INTEGER);\nINSERT INTO t1 VALUES (1);",
    )
    .unwrap();

    assert_eq!(db.probe("SELECT COUNT(*) FROM t1").unwrap(), 1);
    assert_eq!(db.probe("SELECT COUNT(*) FROM t2").unwrap(), 0);
}

#[test]
fn test_execute_batch_error() {
    let db = SqliteConnector::in_memory().unwrap();
    let err = db.execute_batch("CREATE TABLE broken (").unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[test]
fn test_execute_with_params() {
    let db = SqliteConnector::in_memory().unwrap();
    db.execute_batch("CREATE TABLE kv (k TEXT, v INTEGER)").unwrap();

    db.execute("INSERT INTO kv VALUES (?, ?)", &[Value::from("a"), Value::Integer(1)])
        .unwrap();
    db.execute("INSERT INTO kv VALUES (?, ?)", &[Value::from("b"), Value::Integer(2)])
        .unwrap();
    let deleted = db
        .execute("DELETE FROM kv WHERE k = ?", &[Value::from("a")])
        .unwrap();

    assert_eq!(deleted, 1);
    assert_eq!(db.probe("SELECT COUNT(*) FROM kv").unwrap(), 1);
}

#[test]
fn test_insert_returns_generated_ids() {
    let db = SqliteConnector::in_memory().unwrap();
    db.execute_batch("CREATE TABLE items (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT)")
        .unwrap();

    let first = db
        .insert("INSERT INTO items (name) VALUES (?)", &[Value::from("a")], "id")
        .unwrap();
    let second = db
        .insert("INSERT INTO items (name) VALUES (?)", &[Value::from("b")], "id")
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn test_insert_failure() {
    let db = SqliteConnector::in_memory().unwrap();
    let err = db
        .insert("INSERT INTO missing (name) VALUES (?)", &[Value::from("a")], "id")
        .unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[test]
fn test_query_rows() {
    let db = SqliteConnector::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE people (id INTEGER, name TEXT, note TEXT);
         INSERT INTO people VALUES (1, 'ada', NULL), (2, 'bob', 'x');",
    )
    .unwrap();

    let rows = db
        .query("SELECT id, name, note FROM people ORDER BY id", &[])
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get_i64(0).unwrap(), 1);
    assert_eq!(rows[0].get_string(1).unwrap(), "ada");
    assert_eq!(rows[0].get_opt_string(2).unwrap(), None);
    assert_eq!(rows[1].get_opt_string(2).unwrap(), Some("x".to_string()));
}

#[test]
fn test_query_missing_table() {
    let db = SqliteConnector::in_memory().unwrap();
    let err = db.query("SELECT * FROM nowhere", &[]).unwrap_err();
    assert!(matches!(err, DbError::QueryError(_)));
}

#[test]
fn test_probe_missing_table_errors() {
    let db = SqliteConnector::in_memory().unwrap();
    assert!(db.probe("SELECT COUNT(id) FROM schema_script").is_err());
}

#[test]
fn test_file_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.db");
    {
        let db = SqliteConnector::from_path(&path).unwrap();
        db.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1);")
            .unwrap();
    }
    let db = SqliteConnector::new(path.to_str().unwrap()).unwrap();
    assert_eq!(db.probe("SELECT COUNT(*) FROM t").unwrap(), 1);
}
