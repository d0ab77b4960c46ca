//! Migration catalog scanning.
//!
//! The catalog is recomputed from the directory on every call: the directory
//! is the source of truth for which scripts exist, the ledger only records
//! which of them ran.

use crate::error::{CoreError, CoreResult};
use crate::script_name::ScriptName;
use std::ffi::OsStr;
use std::path::Path;

/// File extension a migration script must carry to be picked up.
pub const MIGRATION_EXTENSION: &str = "sql";

/// List the migration scripts in `dir`, ascending by full path string.
///
/// Only non-empty regular files ending in `.sql` are returned; subdirectories
/// are ignored and never descended into, and entries that cannot be stat'ed
/// (such as dangling symlinks) are skipped. Fails only when `dir` itself
/// cannot be listed. Ordering is a plain string
/// comparison, so numeric prefixes must be zero-padded to sort numerically.
pub fn scan(dir: &Path) -> CoreResult<Vec<ScriptName>> {
    let scan_error = |source: std::io::Error| CoreError::Scan {
        path: dir.display().to_string(),
        source,
    };

    let mut scripts = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_error)? {
        let path = entry.map_err(scan_error)?.path();
        if path.extension() != Some(OsStr::new(MIGRATION_EXTENSION)) {
            continue;
        }

        // Follows symlinks; an entry that cannot be stat'ed is not a script.
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("Skipping unreadable entry {}: {e}", path.display());
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        if metadata.len() == 0 {
            log::debug!("Skipping empty migration file {}", path.display());
            continue;
        }

        if let Some(name) = ScriptName::try_new(path.to_string_lossy()) {
            scripts.push(name);
        }
    }

    scripts.sort();
    Ok(scripts)
}

/// Same set as [`scan`], in exactly the reverse order.
pub fn scan_reverse(dir: &Path) -> CoreResult<Vec<ScriptName>> {
    let mut scripts = scan(dir)?;
    scripts.reverse();
    Ok(scripts)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
