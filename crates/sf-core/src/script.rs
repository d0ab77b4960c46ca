//! Directional migration script parsing.
//!
//! A migration file holds an `up` block and a `down` block, each introduced
//! by a marker line:
//!
//! ```sql
//! -- up
//! CREATE TABLE a (id INTEGER);
//! -- down
//! DROP TABLE a;
//! ```
//!
//! Lines are trimmed and blank lines dropped. The returned block is opaque
//! text; no statement splitting or SQL validation happens here.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Prefix that introduces a section marker line.
pub const SECTION_PREFIX: &str = "--";

/// Which block of a migration script to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward block, run on upgrade
    Up,
    /// Backward block, run on revert
    Down,
}

impl Direction {
    /// Marker keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// If `line` is a section marker, return the direction it opens.
///
/// Only `up` and `down` (any case) are section keywords. Other `--` lines are
/// ordinary SQL comments and stay part of the current section.
fn section_marker(line: &str) -> Option<Direction> {
    line.strip_prefix(SECTION_PREFIX)?.trim().parse().ok()
}

fn read_lines(path: &Path) -> CoreResult<Vec<String>> {
    let read_error = |source: std::io::Error| CoreError::ScriptRead {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_error)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Join lines the way script blocks are handed to the database: each line
/// prefixed with a newline.
fn join_block<'a>(lines: impl Iterator<Item = &'a String>) -> String {
    lines.fold(String::new(), |mut block, line| {
        block.push('\n');
        block.push_str(line);
        block
    })
}

/// Read the block for `direction` from the script at `path`.
///
/// A file with no section markers at all is a single undirected block and is
/// returned for [`Direction::Up`] only; its `down` block is empty. A file
/// with markers but no section for `direction` also yields an empty string.
pub fn read(path: &Path, direction: Direction) -> CoreResult<String> {
    let lines = read_lines(path)?;

    if !lines.iter().any(|l| section_marker(l).is_some()) {
        return Ok(match direction {
            Direction::Up => join_block(lines.iter()),
            Direction::Down => String::new(),
        });
    }

    let mut current: Option<Direction> = None;
    let mut selected = Vec::new();
    for line in &lines {
        if let Some(section) = section_marker(line) {
            current = Some(section);
            continue;
        }
        if current == Some(direction) {
            selected.push(line);
        }
    }
    Ok(join_block(selected.into_iter()))
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
