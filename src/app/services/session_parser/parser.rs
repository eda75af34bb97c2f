//! Cell-to-session parsing
//!
//! Segments a reconciled cell into sub-blocks, runs the matcher cascade on
//! each one and falls back to a degraded session when nothing in the cell
//! matched.

use tracing::{debug, warn};

use super::fallback::fallback_session;
use super::matchers::{SessionMatcher, default_cascade};
use super::segmentation::split_sub_blocks;
use crate::app::models::Session;

/// Parser for the free-text content of one timetable cell
pub struct SessionBlockParser {
    matchers: Vec<Box<dyn SessionMatcher>>,
}

impl Default for SessionBlockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionBlockParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBlockParser")
            .field(
                "matchers",
                &self.matchers.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl SessionBlockParser {
    /// Create a parser with the standard matcher cascade
    pub fn new() -> Self {
        Self::with_matchers(default_cascade())
    }

    /// Create a parser with a custom cascade, tried in the given order
    pub fn with_matchers(matchers: Vec<Box<dyn SessionMatcher>>) -> Self {
        Self { matchers }
    }

    /// Parse every session held in a cell
    ///
    /// Returns an empty vector only for blank text. Any other text yields at
    /// least one session.
    pub fn parse_cell(&self, cell_text: &str) -> Vec<Session> {
        let blocks = split_sub_blocks(cell_text);
        if blocks.is_empty() {
            return Vec::new();
        }

        let sessions: Vec<Session> = blocks
            .iter()
            .filter_map(|block| self.match_block(block))
            .collect();

        if sessions.is_empty() {
            warn!("No session pattern matched cell, using fallback: {:?}", cell_text);
            return vec![fallback_session(cell_text)];
        }

        sessions
    }

    /// First matching convention for one sub-block
    pub fn match_block(&self, block: &str) -> Option<Session> {
        for matcher in &self.matchers {
            if let Some(session) = matcher.try_match(block) {
                debug!("Sub-block {:?} matched {}", block, matcher.name());
                return Some(session);
            }
        }

        debug!("Sub-block {:?} matched no pattern", block);
        None
    }
}
