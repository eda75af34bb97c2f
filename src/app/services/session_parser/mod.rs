//! Session parser for timetable cell text
//!
//! Turns the free text of one reconciled table cell, which may hold several
//! sessions glued together, into structured [`Session`] records.
//!
//! ## Architecture
//!
//! - [`type_normalizer`] - Short type codes to canonical labels
//! - [`segmentation`] - Splitting a cell into one sub-block per session
//! - [`matchers`] - The ordered session authoring conventions
//! - [`fallback`] - Degraded session for unrecognized cells
//! - [`parser`] - Orchestration of the above
//!
//! ## Usage
//!
//! ```rust
//! use timetable_processor::app::services::session_parser::SessionBlockParser;
//!
//! let parser = SessionBlockParser::new();
//! let sessions = parser.parse_cell("G1:204 / Algorithms -- C, Smith");
//!
//! assert_eq!(sessions.len(), 1);
//! assert_eq!(sessions[0].course, "Algorithms");
//! ```
//!
//! [`Session`]: crate::app::models::Session

pub mod fallback;
pub mod matchers;
pub mod parser;
pub mod segmentation;
pub mod type_normalizer;

#[cfg(test)]
pub mod tests;

pub use matchers::{SessionMatcher, default_cascade};
pub use parser::SessionBlockParser;
pub use type_normalizer::normalize;
