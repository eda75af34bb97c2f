//! Column reconciliation for fragmented grid rows
//!
//! The extractor splits some time-slot cells over two physical columns. A
//! [`ColumnLayout`] says which columns feed each logical slot; this module
//! joins the fragments into one cell string per slot.

use crate::config::{ColumnLayout, ColumnSource};

/// Joins physical grid columns into logical time-slot cells
#[derive(Debug, Clone, Default)]
pub struct ColumnReconciler {
    layout: ColumnLayout,
}

impl ColumnReconciler {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// One cell string per logical slot, in slot order
    pub fn reconcile(&self, row: &[Option<String>]) -> Vec<String> {
        self.layout
            .sources()
            .iter()
            .map(|source| match *source {
                ColumnSource::Single(index) => cell(row, index).to_string(),
                ColumnSource::Split(first, second) => {
                    format!("{} {}", cell(row, first), cell(row, second))
                        .trim()
                        .to_string()
                }
            })
            .collect()
    }
}

/// Trimmed cell content; missing cells read as empty
fn cell(row: &[Option<String>], index: usize) -> &str {
    row.get(index)
        .and_then(|value| value.as_deref())
        .map(str::trim)
        .unwrap_or("")
}
