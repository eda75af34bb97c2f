//! Test utilities for the session parser
//!
//! Shared fixtures for the matcher, segmentation and cell parsing tests.

use crate::app::models::Session;


/// Build the session the grouped convention yields for a fully specified cell
pub fn grouped_session(
    group: &str,
    room: Option<&str>,
    course: &str,
    session_type: &str,
    professor: Option<&str>,
) -> Session {
    Session {
        group: Some(group.to_string()),
        room: room.map(str::to_string),
        course: course.to_string(),
        session_type: session_type.to_string(),
        professor: professor.map(str::to_string),
    }
}

/// A cell holding two stacked sessions
pub fn create_stacked_cell() -> String {
    "G1:204 / Algorithms -- C, Smith\nG2:105 / Networks -- PW, Benali".to_string()
}

/// The same two sessions collapsed onto one line by the extractor
pub fn create_collapsed_cell() -> String {
    "G1:204 / Algorithms -- C, Smith G2:105 / Networks -- PW, Benali".to_string()
}
