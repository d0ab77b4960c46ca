//! Shared helpers for migration engine tests.

use crate::progress::ProgressSink;
use sf_db::{DatabaseConnector, DbError, DbResult, Dialect, Row, SqliteConnector, Value};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Write a migration script with the given up and down blocks.
pub(crate) fn write_script(dir: &Path, name: &str, up: &str, down: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("-- up\n{up}\n-- down\n{down}\n")).unwrap();
    path
}

/// Script name as the catalog reports it for `name` inside `dir`.
pub(crate) fn script_name(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

/// SQLite connector that can be told to fail ledger writes.
pub(crate) struct FlakyConnector {
    inner: SqliteConnector,
    pub fail_inserts: Cell<bool>,
    pub fail_deletes: Cell<bool>,
    pub fail_batches: Cell<bool>,
}

impl FlakyConnector {
    pub fn new() -> Self {
        Self {
            inner: SqliteConnector::in_memory().unwrap(),
            fail_inserts: Cell::new(false),
            fail_deletes: Cell::new(false),
            fail_batches: Cell::new(false),
        }
    }
}

impl DatabaseConnector for FlakyConnector {
    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        if self.fail_batches.get() {
            return Err(DbError::ExecutionError("injected batch failure".to_string()));
        }
        self.inner.execute_batch(sql)
    }

    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize> {
        if self.fail_deletes.get() && sql.starts_with("DELETE") {
            return Err(DbError::ExecutionError("injected delete failure".to_string()));
        }
        self.inner.execute(sql, params)
    }

    fn insert(&self, sql: &str, params: &[Value], id_column: &str) -> DbResult<i64> {
        if self.fail_inserts.get() {
            return Err(DbError::ExecutionError("injected insert failure".to_string()));
        }
        self.inner.insert(sql, params, id_column)
    }

    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        self.inner.query(sql, params)
    }

    fn probe(&self, sql: &str) -> DbResult<i64> {
        self.inner.probe(sql)
    }

    fn dialect(&self) -> Dialect {
        self.inner.dialect()
    }
}

/// Progress sink that counts calls; clones share the counters.
#[derive(Clone, Default)]
pub(crate) struct RecordingProgress {
    pub started: Rc<RefCell<Vec<u64>>>,
    pub advanced: Rc<Cell<usize>>,
    pub finished: Rc<RefCell<Vec<String>>>,
}

impl ProgressSink for RecordingProgress {
    fn start(&self, total: u64) {
        self.started.borrow_mut().push(total);
    }

    fn advance(&self) {
        self.advanced.set(self.advanced.get() + 1);
    }

    fn finish(&self, message: &str) {
        self.finished.borrow_mut().push(message.to_string());
    }
}
