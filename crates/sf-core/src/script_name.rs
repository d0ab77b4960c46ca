//! Migration script identifier.

use std::fmt;
use std::ops::Deref;
use std::path::Path;

/// One migration script in the catalog, identified by its full path as
/// scanned (directory joined with file name).
///
/// This is the exact string written to the ledger's `script_name` column, so
/// scans of the same directory spelled differently (`./m` vs `m`) yield
/// different identifiers. Ordering is plain string ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptName(String);

impl ScriptName {
    /// Wrap `name`, panicking in debug builds if it is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        debug_assert!(!s.is_empty(), "ScriptName must not be empty");
        Self(s)
    }

    /// Wrap `name`, or `None` if it is empty.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        (!s.is_empty()).then_some(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The script's location on disk.
    pub fn path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ScriptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for ScriptName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ScriptName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "script_name_test.rs"]
mod tests;
