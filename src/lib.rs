//! Timetable Processor Library
//!
//! A Rust library for turning the extracted text and table grid of a
//! university timetable document into a structured weekly schedule.
//!
//! This library provides tools for:
//! - Parsing the document header (program, year, section, semester, date)
//! - Resolving day labels split across grid columns
//! - Reconciling physical grid columns into logical time slots
//! - Parsing free-text cells into sessions via an ordered pattern cascade
//! - Aggregating professor and subject indices with summary statistics
//! - Escalating to an external extraction service when no session is found

pub mod config;
pub mod constants;
pub mod error;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod fallback_client;
        pub mod header_parser;
        pub mod schedule_builder;
        pub mod session_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Day, HeaderInfo, Professor, RawExtraction, ScheduleDocument, Session, SlotEntry, Statistics,
    Subject, WeeklySchedule,
};
pub use config::TimetableConfig;
pub use error::{Error, Result};
pub use processor::{ProcessOutcome, ScheduleProcessor};
