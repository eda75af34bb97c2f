//! Weekly schedule builder for extracted timetable grids
//!
//! Turns the raw 2-D grid produced by the document extractor into a
//! [`WeeklySchedule`]. The design assumes one fixed document template whose
//! column layout is supplied as configuration.
//!
//! ## Architecture
//!
//! - [`day_resolver`] - Canonical day from a (possibly split) day label
//! - [`column_reconciler`] - Physical columns to logical slot cells
//! - [`builder`] - Row loop tying resolution, reconciliation and parsing together
//! - [`stats`] - Counters for one build pass
//!
//! [`WeeklySchedule`]: crate::app::models::WeeklySchedule

pub mod builder;
pub mod column_reconciler;
pub mod day_resolver;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use builder::ScheduleBuilder;
pub use column_reconciler::ColumnReconciler;
pub use day_resolver::{resolve, resolve_row};
pub use stats::BuildStats;
