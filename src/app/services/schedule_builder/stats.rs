//! Build statistics for one pass over the table grid

use serde::{Deserialize, Serialize};

/// Counters collected while building the weekly schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Data rows examined (header row excluded)
    pub rows_scanned: usize,

    /// Rows resolved to a day
    pub day_rows: usize,

    /// Rows skipped because no day could be resolved
    pub rows_skipped: usize,

    /// Non-empty slot cells handed to the session parser
    pub cells_parsed: usize,

    /// Sessions produced across all cells
    pub sessions_parsed: usize,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of scanned rows that were day rows
    pub fn day_row_rate(&self) -> f64 {
        if self.rows_scanned == 0 {
            0.0
        } else {
            (self.day_rows as f64 / self.rows_scanned as f64) * 100.0
        }
    }

    /// Whether the grid produced any session at all
    pub fn found_sessions(&self) -> bool {
        self.sessions_parsed > 0
    }
}
