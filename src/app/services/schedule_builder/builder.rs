//! Weekly schedule assembly from the raw table grid
//!
//! Drives day resolution, column reconciliation and cell parsing over every
//! data row. Sessions of the same day and slot are merged into one slot
//! entry and slots are emitted in canonical time order.

use std::collections::BTreeMap;
use tracing::{debug, info};

use super::column_reconciler::ColumnReconciler;
use super::day_resolver::resolve_row;
use super::stats::BuildStats;
use crate::app::models::{Day, Session, SlotEntry, WeeklySchedule};
use crate::app::services::session_parser::SessionBlockParser;
use crate::config::ColumnLayout;
use crate::constants::TIME_SLOTS;

/// Builds a [`WeeklySchedule`] from grid rows
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    reconciler: ColumnReconciler,
    parser: SessionBlockParser,
}

impl ScheduleBuilder {
    /// Create a builder for the given column layout
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            reconciler: ColumnReconciler::new(layout),
            parser: SessionBlockParser::new(),
        }
    }

    /// Create a builder with a custom cell parser
    pub fn with_parser(layout: ColumnLayout, parser: SessionBlockParser) -> Self {
        Self {
            reconciler: ColumnReconciler::new(layout),
            parser,
        }
    }

    /// Build the weekly schedule; row 0 is the header row and is skipped
    pub fn build(&self, grid: &[Vec<Option<String>>]) -> WeeklySchedule {
        self.build_with_stats(grid).0
    }

    /// Build the weekly schedule and report what the pass saw
    pub fn build_with_stats(&self, grid: &[Vec<Option<String>>]) -> (WeeklySchedule, BuildStats) {
        let mut stats = BuildStats::new();
        let mut slots_by_day: BTreeMap<Day, BTreeMap<usize, Vec<Session>>> = BTreeMap::new();

        for (row_index, row) in grid.iter().enumerate().skip(1) {
            stats.rows_scanned += 1;

            let Some(day) = resolve_row(row) else {
                stats.rows_skipped += 1;
                debug!("Row {} has no day label, skipping", row_index);
                continue;
            };
            stats.day_rows += 1;

            let cells = self.reconciler.reconcile(row);
            for (slot_index, cell_text) in cells.iter().enumerate().take(TIME_SLOTS.len()) {
                if cell_text.is_empty() {
                    continue;
                }
                stats.cells_parsed += 1;

                let sessions = self.parser.parse_cell(cell_text);
                if sessions.is_empty() {
                    continue;
                }
                debug!(
                    "{} {}: {} session(s)",
                    day,
                    TIME_SLOTS[slot_index],
                    sessions.len()
                );
                stats.sessions_parsed += sessions.len();

                slots_by_day
                    .entry(day)
                    .or_default()
                    .entry(slot_index)
                    .or_default()
                    .extend(sessions);
            }
        }

        let mut schedule = WeeklySchedule::new();
        for (day, slots) in slots_by_day {
            for (slot_index, sessions) in slots {
                schedule.push_slot(
                    day,
                    SlotEntry {
                        time: TIME_SLOTS[slot_index].to_string(),
                        sessions,
                    },
                );
            }
        }

        info!(
            "Built schedule: {} day rows of {} scanned, {} sessions",
            stats.day_rows, stats.rows_scanned, stats.sessions_parsed
        );

        (schedule, stats)
    }
}
