//! Command handlers; each one reads or mutates the tracker and prints.

pub mod catalog;
pub mod reading;
pub mod season;

use anyhow::Result;
use serde::Serialize;

/// Output mode selected by `--json`.
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints `rows` as pretty JSON when requested.
    ///
    /// Returns `false` when the caller should render text instead.
    pub fn json_rows<T: Serialize>(&self, rows: &[T]) -> Result<bool> {
        if !self.json {
            return Ok(false);
        }
        println!("{}", serde_json::to_string_pretty(rows)?);
        Ok(true)
    }
}
